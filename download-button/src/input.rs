//! Touch Input
//!
//! Hosts translate their pointer or touch events into `TouchEvent`s in the
//! button's local coordinates. A tap is a press and a release that both land
//! inside the button; it fires once no matter how many moves happen between.

use glam::Vec2;

use crate::render::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchAction {
    Pressed,
    Moved,
    Released,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub position: Vec2,
}

impl TouchEvent {
    pub fn new(action: TouchAction, position: Vec2) -> Self {
        Self { action, position }
    }
}

/// Turns press/release pairs into discrete taps.
#[derive(Clone, Debug, Default)]
pub struct TapRecognizer {
    armed: bool,
}

impl TapRecognizer {
    /// Returns true when `event` completes a tap inside `bounds`.
    pub fn feed(&mut self, event: TouchEvent, bounds: Rect) -> bool {
        let inside = bounds.contains(event.position);
        match event.action {
            TouchAction::Pressed => {
                self.armed = inside;
                false
            }
            TouchAction::Moved => false,
            TouchAction::Released => std::mem::take(&mut self.armed) && inside,
            TouchAction::Cancelled => {
                self.armed = false;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 50.0,
    };

    fn ev(action: TouchAction, x: f32, y: f32) -> TouchEvent {
        TouchEvent::new(action, Vec2::new(x, y))
    }

    #[test]
    fn press_release_inside_is_one_tap() {
        let mut tap = TapRecognizer::default();
        assert!(!tap.feed(ev(TouchAction::Pressed, 10.0, 10.0), BOUNDS));
        assert!(!tap.feed(ev(TouchAction::Moved, 20.0, 10.0), BOUNDS));
        assert!(!tap.feed(ev(TouchAction::Moved, 30.0, 10.0), BOUNDS));
        assert!(tap.feed(ev(TouchAction::Released, 30.0, 10.0), BOUNDS));
        // A stray second release is not another tap
        assert!(!tap.feed(ev(TouchAction::Released, 30.0, 10.0), BOUNDS));
    }

    #[test]
    fn release_outside_or_cancel_is_no_tap() {
        let mut tap = TapRecognizer::default();
        tap.feed(ev(TouchAction::Pressed, 10.0, 10.0), BOUNDS);
        assert!(!tap.feed(ev(TouchAction::Released, 150.0, 10.0), BOUNDS));

        tap.feed(ev(TouchAction::Pressed, 10.0, 10.0), BOUNDS);
        tap.feed(ev(TouchAction::Cancelled, 10.0, 10.0), BOUNDS);
        assert!(!tap.feed(ev(TouchAction::Released, 10.0, 10.0), BOUNDS));
    }

    #[test]
    fn press_outside_then_release_inside_is_no_tap() {
        let mut tap = TapRecognizer::default();
        tap.feed(ev(TouchAction::Pressed, -1.0, 10.0), BOUNDS);
        assert!(!tap.feed(ev(TouchAction::Released, 10.0, 10.0), BOUNDS));
    }
}
