/// Frame painter: background, download glyph and wipe mask, or the checkmark.

use glam::Vec2;
use tracing::trace;

use crate::color::Color;
use crate::glyph::{GlyphSource, CHECK_GLYPH, DOWNLOAD_GLYPH, GLYPH_TEXT_SIZE};
use crate::render::{DisplayList, Rect};
use crate::state::ButtonState;
use crate::style::ButtonStyle;

/// Checkmark baseline sits this fraction of the height above the bottom.
const CHECK_BASELINE_INSET: f32 = 0.1;

/// Record one frame for a `size.x` by `size.y` canvas.
///
/// While downloading this also steps the mask animation, so every call is a
/// frame of progress.
pub fn paint_frame(
    list: &mut DisplayList,
    state: &mut ButtonState,
    style: &ButtonStyle,
    size: Vec2,
    glyphs: &impl GlyphSource,
) {
    let (width, height) = (size.x, size.y);
    let radius = style.corner_radius as f32;

    list.begin_frame();
    list.clear(Color::TRANSPARENT);

    if state.downloaded() {
        let bounds = glyphs.measure(CHECK_GLYPH, GLYPH_TEXT_SIZE);
        let origin = Vec2::new(
            (width - bounds.width) / 2.0,
            height - height * CHECK_BASELINE_INSET,
        );
        list.draw_glyph(CHECK_GLYPH, origin, GLYPH_TEXT_SIZE, style.downloaded_color);
        return;
    }

    list.draw_rect(Rect::new(0.0, 0.0, width, height), style.back_color, radius);

    // Baseline at the glyph's own height keeps its top flush with the canvas top.
    let bounds = glyphs.measure(DOWNLOAD_GLYPH, GLYPH_TEXT_SIZE);
    let origin = Vec2::new((width - bounds.width) / 2.0, bounds.height);
    list.draw_glyph(DOWNLOAD_GLYPH, origin, GLYPH_TEXT_SIZE, style.fore_color);

    if !state.is_downloading() {
        return;
    }

    let mask_height = state.mask_mut().advance(height);
    trace!(mask_height, "wipe frame");
    let mask = Rect::from_ltrb(0.0, height - mask_height, width, height);
    list.draw_rect(mask, style.back_color, radius);
}
