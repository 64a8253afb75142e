//! Button State
//!
//! The button is always in exactly one of three phases. The public surface
//! still speaks in the two flags hosts bind to (`is_downloading`,
//! `downloaded`), but the phase enum makes "downloaded while downloading"
//! unrepresentable.

use tracing::debug;

/// Pixels the mask shrinks by per painted frame.
pub const ANIM_SPEED: f32 = 5.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Downloading,
    Downloaded,
}

/// Height of the rectangle covering the glyph while downloading.
///
/// `None` until the first animated frame; that frame starts at full height.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MaskAnimation {
    height: Option<f32>,
}

impl MaskAnimation {
    pub fn height(&self) -> Option<f32> {
        self.height
    }

    pub(crate) fn reset(&mut self) {
        self.height = None;
    }

    /// Step one frame and return the new height, clamped to `[0, full_height]`.
    ///
    /// A frame with no height (a layout pass at 0x0) draws no mask and leaves
    /// the animation where it was.
    pub(crate) fn advance(&mut self, full_height: f32) -> f32 {
        let full = full_height.max(0.0);
        if full == 0.0 {
            return 0.0;
        }
        let next = match self.height {
            None => full,
            Some(prev) => prev - ANIM_SPEED,
        };
        let next = next.clamp(0.0, full);
        self.height = Some(next);
        next
    }
}

#[derive(Clone, Debug, Default)]
pub struct ButtonState {
    phase: Phase,
    mask: MaskAnimation,
}

impl ButtonState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_downloading(&self) -> bool {
        self.phase == Phase::Downloading
    }

    pub fn downloaded(&self) -> bool {
        self.phase == Phase::Downloaded
    }

    pub fn mask(&self) -> &MaskAnimation {
        &self.mask
    }

    pub(crate) fn mask_mut(&mut self) -> &mut MaskAnimation {
        &mut self.mask
    }

    /// Returns true if the phase changed.
    pub fn set_downloading(&mut self, downloading: bool) -> bool {
        let next = match (self.phase, downloading) {
            (Phase::Downloading, true) => Phase::Downloading,
            (_, true) => {
                // Entering the animation, including after a completed download.
                self.mask.reset();
                Phase::Downloading
            }
            (Phase::Downloading, false) => Phase::Idle,
            (phase, false) => phase,
        };
        self.transition(next)
    }

    /// Returns true if the phase changed.
    pub fn set_downloaded(&mut self, downloaded: bool) -> bool {
        let next = match (self.phase, downloaded) {
            (_, true) => Phase::Downloaded,
            (Phase::Downloaded, false) => Phase::Idle,
            (phase, false) => phase,
        };
        self.transition(next)
    }

    fn transition(&mut self, next: Phase) -> bool {
        if next == self.phase {
            return false;
        }
        debug!(from = ?self.phase, to = ?next, "button phase");
        self.phase = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_counts_down_from_full_height_and_holds_at_zero() {
        let mut mask = MaskAnimation::default();
        assert_eq!(mask.advance(200.0), 200.0);
        assert_eq!(mask.advance(200.0), 195.0);
        for _ in 0..38 {
            mask.advance(200.0);
        }
        assert_eq!(mask.height(), Some(5.0));
        assert_eq!(mask.advance(200.0), 0.0);
        assert_eq!(mask.advance(200.0), 0.0);
    }

    #[test]
    fn mask_clamps_to_shrunken_height() {
        let mut mask = MaskAnimation::default();
        mask.advance(200.0);
        assert_eq!(mask.advance(50.0), 50.0);
        assert_eq!(mask.advance(-10.0), 0.0);
        assert_eq!(mask.height(), Some(50.0));
        assert_eq!(mask.advance(50.0), 45.0);
    }

    #[test]
    fn zero_height_frame_keeps_the_first_frame_pending() {
        let mut mask = MaskAnimation::default();
        assert_eq!(mask.advance(0.0), 0.0);
        assert_eq!(mask.height(), None);
        assert_eq!(mask.advance(200.0), 200.0);
    }

    #[test]
    fn transitions_follow_the_state_machine() {
        let mut state = ButtonState::default();
        assert_eq!(state.phase(), Phase::Idle);

        assert!(state.set_downloading(true));
        assert_eq!(state.phase(), Phase::Downloading);
        assert!(!state.set_downloading(true));

        assert!(state.set_downloading(false));
        assert_eq!(state.phase(), Phase::Idle);

        assert!(state.set_downloaded(true));
        assert_eq!(state.phase(), Phase::Downloaded);

        assert!(state.set_downloading(true));
        assert_eq!(state.phase(), Phase::Downloading);

        assert!(state.set_downloaded(true));
        assert!(!state.set_downloading(false));
        assert_eq!(state.phase(), Phase::Downloaded);

        assert!(state.set_downloaded(false));
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.set_downloaded(false));
    }

    #[test]
    fn downloaded_never_coexists_with_downloading() {
        let mut state = ButtonState::default();
        let ops: [fn(&mut ButtonState); 4] = [
            |s| {
                s.set_downloading(true);
            },
            |s| {
                s.set_downloading(false);
            },
            |s| {
                s.set_downloaded(true);
            },
            |s| {
                s.set_downloaded(false);
            },
        ];
        for a in ops {
            for b in ops {
                for c in ops {
                    a(&mut state);
                    b(&mut state);
                    c(&mut state);
                    assert!(!(state.downloaded() && state.is_downloading()));
                }
            }
        }
    }

    #[test]
    fn re_entering_downloading_resets_the_mask() {
        let mut state = ButtonState::default();
        state.set_downloading(true);
        state.mask_mut().advance(100.0);
        state.mask_mut().advance(100.0);
        assert_eq!(state.mask().height(), Some(95.0));

        // Redundant set keeps the animation going
        state.set_downloading(true);
        assert_eq!(state.mask().height(), Some(95.0));

        state.set_downloading(false);
        state.set_downloading(true);
        assert_eq!(state.mask().height(), None);
    }
}
