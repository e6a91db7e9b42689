//! Swipe-to-dismiss for list rows.
//!
//! A [`SwipeRow`] turns a stream of cumulative drag samples into either a
//! snap back to rest or a commit that slides the row off-screen and then
//! fires its dismissal callback. Thresholds live in [`SwipeConfig`] so the
//! cart, wishlist and notification lists share one implementation.

mod animation;
mod swipe;

pub use animation::*;
pub use swipe::*;

use std::time::Duration;

/// Cumulative displacement since the gesture started, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSample {
    pub dx: f32,
    pub dy: f32,
}

impl GestureSample {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    pub fn horizontal(dx: f32) -> Self {
        Self { dx, dy: 0.0 }
    }
}

/// Thresholds for one kind of swipeable list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Horizontal travel must exceed `capture_ratio * |dy|` to claim the gesture.
    pub capture_ratio: f32,
    /// Horizontal travel must also exceed this, to ignore jitter.
    pub noise_threshold: f32,
    /// Release further left than this (negative) commits the dismissal.
    pub commit_threshold: f32,
    /// Duration of the slide off-screen.
    pub dismiss_duration: Duration,
}

impl SwipeConfig {
    /// Cart and wishlist rows.
    pub fn list_row() -> Self {
        Self {
            capture_ratio: 1.0,
            noise_threshold: 10.0,
            commit_threshold: -80.0,
            dismiss_duration: Duration::from_millis(200),
        }
    }

    /// Notification rows claim only clearly horizontal drags.
    pub fn notification() -> Self {
        Self {
            capture_ratio: 2.0,
            noise_threshold: 0.0,
            ..Self::list_row()
        }
    }

    /// Whether a drag is horizontal enough to take over from vertical scroll.
    pub fn captures(&self, sample: GestureSample) -> bool {
        let dx = sample.dx.abs();
        dx > self.capture_ratio * sample.dy.abs() && dx > self.noise_threshold
    }

    pub fn commits(&self, sample: GestureSample) -> bool {
        sample.dx < self.commit_threshold
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self::list_row()
    }
}
