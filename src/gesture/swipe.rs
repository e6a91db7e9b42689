use std::time::Duration;
use super::{Animation, GestureSample, SwipeConfig};

/// How a row reacted to the end of a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// The row never claimed the gesture.
    Ignored,
    SnapBack,
    Commit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Tracking,
    Settling { animation: Animation, commit: bool },
    Dismissed,
}

/// Swipe state for one list row.
///
/// `on_dismiss` runs once, from inside [`SwipeRow::advance`], on the frame the
/// off-screen animation reaches `-width`. After that the row is inert.
pub struct SwipeRow<F: FnMut()> {
    config: SwipeConfig,
    width: f32,
    offset: f32,
    phase: Phase,
    on_dismiss: F,
}

impl<F: FnMut()> SwipeRow<F> {
    pub fn new(config: SwipeConfig, on_dismiss: F) -> Self {
        Self {
            config,
            width: 0.0,
            offset: 0.0,
            phase: Phase::Idle,
            on_dismiss,
        }
    }

    /// Records the laid-out width. Gestures are not claimed until this is non-zero.
    pub fn set_width(&mut self, width: f32) {
        self.width = width.max(0.0);
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_tracking(&self) -> bool {
        self.phase == Phase::Tracking
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.phase, Phase::Settling { .. })
    }

    pub fn is_dismissed(&self) -> bool {
        self.phase == Phase::Dismissed
    }

    /// Feeds a drag sample. Returns whether the row owns the gesture.
    pub fn on_move(&mut self, sample: GestureSample) -> bool {
        match self.phase {
            Phase::Dismissed | Phase::Settling { commit: true, .. } => return false,
            Phase::Idle | Phase::Settling { commit: false, .. } => {
                if self.width <= 0.0 || !self.config.captures(sample) {
                    return false;
                }
                self.phase = Phase::Tracking;
            }
            Phase::Tracking => {}
        }
        self.offset = sample.dx.min(0.0);
        true
    }

    pub fn on_release(&mut self, sample: GestureSample) -> Release {
        if self.phase != Phase::Tracking {
            return Release::Ignored;
        }
        self.offset = sample.dx.min(0.0);
        if self.config.commits(sample) {
            let animation = Animation::timing(self.offset, -self.width, self.config.dismiss_duration);
            self.phase = Phase::Settling { animation, commit: true };
            Release::Commit
        } else {
            self.spring_back();
            Release::SnapBack
        }
    }

    /// The system took the gesture away (e.g. the list started scrolling).
    pub fn on_terminate(&mut self) {
        if matches!(self.phase, Phase::Tracking | Phase::Settling { commit: false, .. }) {
            self.spring_back();
        }
    }

    /// Steps any running animation. Returns `true` on the frame the row is dismissed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let (finished, commit) = match &mut self.phase {
            Phase::Settling { animation, commit } => {
                self.offset = animation.advance(dt);
                (animation.is_finished(), *commit)
            }
            _ => return false,
        };
        if !finished {
            return false;
        }
        if commit {
            self.phase = Phase::Dismissed;
            (self.on_dismiss)();
            true
        } else {
            self.phase = Phase::Idle;
            false
        }
    }

    fn spring_back(&mut self) {
        self.phase = Phase::Settling {
            animation: Animation::spring(self.offset, 0.0),
            commit: false,
        };
    }
}
