/// Rasterizes display lists onto a tiny-skia pixmap.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::glyph::GlyphSource;
use crate::render::{DisplayList, Rect, RenderCommand};

pub struct Surface {
    pixmap: Pixmap,
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(Error::Surface { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha color at (x, y), `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.pixmap.save_png(path).map_err(|e| Error::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Execute every command in order.
    pub fn render(&mut self, list: &DisplayList, glyphs: &impl GlyphSource) {
        for cmd in list.commands() {
            match cmd {
                RenderCommand::Clear(color) => self.clear(*color),
                RenderCommand::Rect { rect, color, corner_radius } => {
                    if *corner_radius > 0.0 {
                        self.fill_rounded_rect(rect, *corner_radius, *color);
                    } else {
                        self.fill_rect(rect, *color);
                    }
                }
                RenderCommand::Glyph { glyph, origin, size, color } => {
                    self.draw_glyph(glyphs, *glyph, *origin, *size, *color);
                }
            }
        }
    }

    fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = true;

        // None for empty, inverted or non-finite rects
        if let Some(rect) = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height) {
            self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    fn fill_rounded_rect(&mut self, rect: &Rect, radius: f32, color: Color) {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = true;

        if let Some(path) = rounded_rect_path(rect.x, rect.y, rect.width, rect.height, radius) {
            self.pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    /// Blend a glyph's coverage bitmap source-over onto the premultiplied pixmap.
    fn draw_glyph(&mut self, glyphs: &impl GlyphSource, glyph: char, origin: Vec2, size: f32, color: Color) {
        let bitmap = glyphs.rasterize(glyph, size);
        if bitmap.width == 0 || bitmap.height == 0 || !origin.is_finite() {
            return;
        }

        let pw = self.pixmap.width() as i64;
        let ph = self.pixmap.height() as i64;
        let gx = origin.x.round() as i64 + bitmap.left as i64;
        let gy = origin.y.round() as i64 - bitmap.bottom as i64 - bitmap.height as i64;
        let color_a = color.a as f32 / 255.0;
        let pm = self.pixmap.data_mut();

        for row in 0..bitmap.height {
            let py = gy + row as i64;
            if py < 0 || py >= ph {
                continue;
            }
            for col in 0..bitmap.width {
                let px = gx + col as i64;
                if px < 0 || px >= pw {
                    continue;
                }
                let coverage = bitmap.coverage[row * bitmap.width + col];
                if coverage == 0 {
                    continue;
                }
                let sa = coverage as f32 / 255.0 * color_a;
                let inv = 1.0 - sa;
                let idx = ((py * pw + px) * 4) as usize;
                pm[idx] = (color.r as f32 * sa + pm[idx] as f32 * inv).round() as u8;
                pm[idx + 1] = (color.g as f32 * sa + pm[idx + 1] as f32 * inv).round() as u8;
                pm[idx + 2] = (color.b as f32 * sa + pm[idx + 2] as f32 * inv).round() as u8;
                pm[idx + 3] = (255.0 * sa + pm[idx + 3] as f32 * inv).round() as u8;
            }
        }
    }
}

fn rounded_rect_path(x: f32, y: f32, w: f32, h: f32, r: f32) -> Option<tiny_skia::Path> {
    if !(w > 0.0 && h > 0.0) {
        return None;
    }
    let r = r.min(w / 2.0).min(h / 2.0);
    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.quad_to(x + w, y, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.quad_to(x + w, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.quad_to(x, y + h, x, y + h - r);
    pb.line_to(x, y + r);
    pb.quad_to(x, y, x + r, y);
    pb.close();
    pb.finish()
}
