/// Demo configuration, read from a JSON file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use download_button::ButtonStyle;
use serde::Deserialize;
use tracing::Level;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub width: u32,
    pub height: u32,
    /// Icon font with the download (U+F019) and check (U+F00C) glyphs.
    pub font_path: PathBuf,
    pub download_ms: u64,
    /// Write every painted frame here as a PNG when set.
    pub frames_dir: Option<PathBuf>,
    pub log_level: String,
    pub style: ButtonStyle,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            font_path: PathBuf::from("assets/fa-solid-900.otf"),
            download_ms: 10_000,
            frames_dir: None,
            log_level: "info".into(),
            style: ButtonStyle::default(),
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&json).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Parsed `log_level`. Unknown names fall back to info with a warning on
    /// stderr, since logging is not up yet when this runs.
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or_else(|_| {
            eprintln!(
                "[download-button-demo] unknown log_level {:?}, using info",
                self.log_level
            );
            Level::INFO
        })
    }
}
