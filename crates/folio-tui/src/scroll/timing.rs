//! Clock arithmetic for scroll animations. Every function takes `now`
//! explicitly so frames can be replayed deterministically.

use std::time::{Duration, Instant};

/// Fraction of `duration` elapsed between `start` and `now`, clamped to [0, 1]
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Whether `duration` has fully elapsed at `now`
#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two positions
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Nearest whole row of a fractional scroll position, saturating at the u16 range
#[inline]
pub fn to_row(position: f64) -> u16 {
    position.round().clamp(0.0, u16::MAX as f64) as u16
}
