//! A single eased move from one scroll position to another.

use std::time::{Duration, Instant};

use super::easing::{Ease, EasingType};
use super::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, start: Instant, duration: Duration, easing: EasingType) -> Self {
        Self {
            start,
            from,
            to,
            duration,
            easing,
        }
    }

    /// Final position of the move
    #[inline]
    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Point the move at a new end row, keeping its start and timing
    pub fn retarget(&mut self, to: f64) {
        self.to = to;
    }

    /// Position at `now`, and whether the move has finished.
    /// A finished move always reports exactly its target.
    pub fn sample(&self, now: Instant) -> (f64, bool) {
        if is_complete(self.start, self.duration, now) {
            return (self.to, true);
        }
        let t = self.easing.ease(progress(self.start, self.duration, now));
        (lerp(self.from, self.to, t), false)
    }
}
