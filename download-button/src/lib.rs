//! Download Button
//!
//! An animated download control: a download glyph on a filled background, a
//! fill-wipe mask that shrinks every frame while a download runs, and a
//! checkmark once it completes.
//!
//! The button records each frame into a display list; `raster::Surface`
//! turns that into pixels with tiny-skia, and glyphs come from an icon font
//! through fontdue.

mod button;
pub mod color;
pub mod error;
mod frame;
pub mod glyph;
pub mod input;
pub mod raster;
pub mod render;
pub mod scheduler;
pub mod state;
pub mod style;
pub mod view_model;

pub use button::DownloadButton;
pub use color::Color;
pub use error::{Error, Result};
pub use glyph::{GlyphSource, IconFont};
pub use input::{TouchAction, TouchEvent};
pub use raster::Surface;
pub use render::{DisplayList, Rect, RenderCommand};
pub use scheduler::{FrameTimer, Scheduler, FRAME_PERIOD};
pub use state::Phase;
pub use style::ButtonStyle;
pub use view_model::{DownloadViewModel, Property};
