/// Icon glyphs with fontdue: the download arrow and the checkmark from an icon font.

use std::fmt;
use std::path::Path;

use fontdue::{Font, FontSettings};
use tracing::debug;

use crate::error::{Error, Result};

/// Download arrow code point in the icon font.
pub const DOWNLOAD_GLYPH: char = '\u{f019}';
/// Checkmark code point in the icon font.
pub const CHECK_GLYPH: char = '\u{f00c}';

/// Pixel size glyphs are measured and drawn at.
pub const GLYPH_TEXT_SIZE: f32 = 500.0;

/// Size of a glyph's ink box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlyphBounds {
    pub width: f32,
    pub height: f32,
}

/// Coverage bitmap for one glyph, positioned relative to its pen origin on the baseline.
#[derive(Clone, Debug, Default)]
pub struct GlyphBitmap {
    /// Offset of the left edge from the pen x.
    pub left: i32,
    /// Offset of the bottom edge below the baseline (negative for descenders).
    pub bottom: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major coverage, top row first.
    pub coverage: Vec<u8>,
}

/// Something that can measure and rasterize single glyphs.
pub trait GlyphSource {
    fn measure(&self, glyph: char, size: f32) -> GlyphBounds;
    fn rasterize(&self, glyph: char, size: f32) -> GlyphBitmap;
}

/// An icon font holding both button glyphs.
pub struct IconFont {
    font: Font,
}

impl IconFont {
    /// Parse font bytes and check the download and check glyphs are present.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| Error::FontParse(e.to_string()))?;
        for glyph in [DOWNLOAD_GLYPH, CHECK_GLYPH] {
            if font.lookup_glyph_index(glyph) == 0 {
                return Err(Error::MissingGlyph(glyph));
            }
        }
        debug!(glyphs = font.glyph_count(), "icon font loaded");
        Ok(Self { font })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| Error::FontIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }
}

impl fmt::Debug for IconFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconFont")
            .field("glyphs", &self.font.glyph_count())
            .finish_non_exhaustive()
    }
}

impl GlyphSource for IconFont {
    fn measure(&self, glyph: char, size: f32) -> GlyphBounds {
        if size.is_nan() || size <= 0.0 {
            return GlyphBounds::default();
        }
        let metrics = self.font.metrics(glyph, size);
        GlyphBounds {
            width: metrics.width as f32,
            height: metrics.height as f32,
        }
    }

    fn rasterize(&self, glyph: char, size: f32) -> GlyphBitmap {
        if size.is_nan() || size <= 0.0 {
            return GlyphBitmap::default();
        }
        let (metrics, coverage) = self.font.rasterize(glyph, size);
        GlyphBitmap {
            left: metrics.xmin,
            bottom: metrics.ymin,
            width: metrics.width,
            height: metrics.height,
            coverage,
        }
    }
}
