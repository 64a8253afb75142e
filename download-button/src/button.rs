//! The Download Button
//!
//! Owns the phase state, the style, the icon font and the frame timer. Every
//! setter and every timer tick leaves a redraw request behind; the host drains
//! them with `take_redraw_requests` and calls `paint` when any are pending.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use tracing::{debug, trace};

use crate::color::Color;
use crate::error::Result;
use crate::frame::paint_frame;
use crate::glyph::{GlyphSource, IconFont};
use crate::input::{TapRecognizer, TouchEvent};
use crate::render::{DisplayList, Rect};
use crate::scheduler::{Scheduler, FRAME_PERIOD};
use crate::state::{ButtonState, Phase};
use crate::style::ButtonStyle;

type ClickedCommand = Box<dyn FnMut() + Send>;

pub struct DownloadButton<S, G = IconFont> {
    state: ButtonState,
    style: ButtonStyle,
    scheduler: S,
    glyphs: G,
    clicked: Option<ClickedCommand>,
    tap: TapRecognizer,
    /// Size of the last painted frame, used for hit testing.
    bounds: Option<Rect>,
    redraw_requests: u32,
    display_list: DisplayList,
}

impl<S: Scheduler> DownloadButton<S, IconFont> {
    /// Load the icon font from `path`. A missing or incomplete font is fatal.
    pub fn with_font_file(scheduler: S, path: &Path) -> Result<Self> {
        Ok(Self::new(scheduler, IconFont::load(path)?))
    }
}

impl<S: Scheduler, G: GlyphSource> DownloadButton<S, G> {
    pub fn new(scheduler: S, glyphs: G) -> Self {
        Self {
            state: ButtonState::default(),
            style: ButtonStyle::default(),
            scheduler,
            glyphs,
            clicked: None,
            tap: TapRecognizer::default(),
            bounds: None,
            redraw_requests: 0,
            display_list: DisplayList::new(),
        }
    }

    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    // State

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_downloading(&self) -> bool {
        self.state.is_downloading()
    }

    pub fn downloaded(&self) -> bool {
        self.state.downloaded()
    }

    /// Current wipe mask height, `None` before the first animated frame.
    pub fn mask_height(&self) -> Option<f32> {
        self.state.mask().height()
    }

    pub fn set_downloading(&mut self, downloading: bool) {
        self.state.set_downloading(downloading);
        if self.state.is_downloading() {
            self.scheduler.start(FRAME_PERIOD);
        } else {
            self.scheduler.stop();
        }
        self.invalidate();
    }

    pub fn set_downloaded(&mut self, downloaded: bool) {
        self.state.set_downloaded(downloaded);
        if !self.state.is_downloading() {
            self.scheduler.stop();
        }
        self.invalidate();
    }

    /// Called on the owner thread for every timer tick.
    pub fn on_tick(&mut self) {
        self.invalidate();
    }

    // Style

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: ButtonStyle) {
        self.style = style;
        self.invalidate();
    }

    pub fn set_corner_radius(&mut self, corner_radius: u32) {
        self.style.corner_radius = corner_radius;
        self.invalidate();
    }

    pub fn set_back_color(&mut self, color: Color) {
        self.style.back_color = color;
        self.invalidate();
    }

    pub fn set_fore_color(&mut self, color: Color) {
        self.style.fore_color = color;
        self.invalidate();
    }

    pub fn set_downloaded_color(&mut self, color: Color) {
        self.style.downloaded_color = color;
        self.invalidate();
    }

    // Input

    /// Invoked with no arguments for every tap, whatever the phase.
    pub fn set_clicked_command(&mut self, command: impl FnMut() + Send + 'static) {
        self.clicked = Some(Box::new(command));
    }

    pub fn clear_clicked_command(&mut self) {
        self.clicked = None;
    }

    /// Feed a touch event in local coordinates. Returns true if it completed a tap.
    ///
    /// A button that has never been painted has no bounds and ignores touches.
    pub fn handle_touch(&mut self, event: TouchEvent) -> bool {
        let Some(bounds) = self.bounds else {
            return false;
        };
        if !self.tap.feed(event, bounds) {
            return false;
        }
        debug!(phase = ?self.state.phase(), "tapped");
        if let Some(command) = self.clicked.as_mut() {
            command();
        }
        true
    }

    // Rendering

    fn invalidate(&mut self) {
        self.redraw_requests += 1;
        trace!(pending = self.redraw_requests, "redraw requested");
    }

    /// Number of redraws requested since the last call.
    pub fn take_redraw_requests(&mut self) -> u32 {
        std::mem::take(&mut self.redraw_requests)
    }

    /// Record a frame for a `width` by `height` canvas.
    pub fn paint(&mut self, width: f32, height: f32) -> &DisplayList {
        self.bounds = Some(Rect::new(0.0, 0.0, width, height));
        paint_frame(
            &mut self.display_list,
            &mut self.state,
            &self.style,
            Vec2::new(width, height),
            &self.glyphs,
        );
        &self.display_list
    }

    pub fn display_list(&self) -> &DisplayList {
        &self.display_list
    }

    pub fn glyphs(&self) -> &G {
        &self.glyphs
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<S, G> fmt::Debug for DownloadButton<S, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadButton")
            .field("state", &self.state)
            .field("style", &self.style)
            .field("bounds", &self.bounds)
            .field("redraw_requests", &self.redraw_requests)
            .finish_non_exhaustive()
    }
}
