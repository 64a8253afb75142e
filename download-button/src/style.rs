/// Button style: corner radius and the three paint colors.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    /// 0 selects the plain-rectangle path.
    pub corner_radius: u32,
    pub back_color: Color,
    pub fore_color: Color,
    pub downloaded_color: Color,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            corner_radius: 0,
            back_color: Color::BLACK,
            fore_color: Color::WHITE,
            downloaded_color: Color::GREEN,
        }
    }
}

impl ButtonStyle {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
