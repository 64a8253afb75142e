//! Errors raised while building a button: font loading, style config, surfaces.
//!
//! Painting itself never fails. Degenerate geometry simply draws nothing.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read font {path}: {source}")]
    FontIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse font: {0}")]
    FontParse(String),

    #[error("font has no glyph for U+{:04X}", code_point(.0))]
    MissingGlyph(char),

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid color {0:?}, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    #[error("failed to write {path}: {message}")]
    Encode { path: PathBuf, message: String },

    #[error("cannot allocate a {width}x{height} surface")]
    Surface { width: u32, height: u32 },
}

fn code_point(glyph: &char) -> u32 {
    *glyph as u32
}

pub type Result<T> = std::result::Result<T, Error>;
