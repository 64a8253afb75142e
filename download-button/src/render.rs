//! Display List
//!
//! Paint code never touches pixels directly. It records commands into a
//! display list which a backend (see `raster`) executes afterwards. This keeps
//! the frame logic testable without a font or a pixel buffer.

use glam::Vec2;

use crate::color::Color;

/// A rectangle for rendering
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Half-open containment; an empty or inverted rect contains nothing.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }
}

/// Render commands that accumulate during a frame
#[derive(Clone, Debug, PartialEq)]
pub enum RenderCommand {
    Clear(Color),
    Rect {
        rect: Rect,
        color: Color,
        /// 0 means square corners.
        corner_radius: f32,
    },
    Glyph {
        glyph: char,
        /// Pen position on the baseline.
        origin: Vec2,
        size: f32,
        color: Color,
    },
}

/// Commands for one frame, in paint order.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    commands: Vec<RenderCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    pub fn clear(&mut self, color: Color) {
        self.commands.push(RenderCommand::Clear(color));
    }

    pub fn draw_rect(&mut self, rect: Rect, color: Color, corner_radius: f32) {
        self.commands.push(RenderCommand::Rect {
            rect,
            color,
            corner_radius,
        });
    }

    pub fn draw_glyph(&mut self, glyph: char, origin: Vec2, size: f32, color: Color) {
        self.commands.push(RenderCommand::Glyph {
            glyph,
            origin,
            size,
            color,
        });
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ltrb_and_containment() {
        let rect = Rect::from_ltrb(0.0, 150.0, 200.0, 200.0);
        assert_eq!(rect, Rect::new(0.0, 150.0, 200.0, 50.0));
        assert_eq!(rect.bottom(), 200.0);
        assert!(rect.contains(Vec2::new(0.0, 150.0)));
        assert!(!rect.contains(Vec2::new(200.0, 199.0)));
        assert!(!Rect::new(0.0, 0.0, -10.0, 10.0).contains(Vec2::new(-5.0, 5.0)));
    }

    #[test]
    fn begin_frame_discards_previous_commands() {
        let mut list = DisplayList::new();
        list.clear(Color::TRANSPARENT);
        list.draw_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK, 0.0);
        assert_eq!(list.len(), 2);

        list.begin_frame();
        assert!(list.is_empty());
    }
}
