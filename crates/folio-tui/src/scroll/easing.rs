//! Easing curves mapping animation progress in [0, 1] to distance covered in [0, 1].

pub use folio_core::EasingType;

/// Curve evaluation for [`EasingType`]
pub trait Ease {
    /// Eased value for progress `t`; `t` is clamped to [0, 1]
    fn ease(&self, t: f64) -> f64;
}

impl Ease for EasingType {
    #[inline]
    fn ease(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => step(t),
            EasingType::Linear => t,
            EasingType::Cubic => 1.0 - (1.0 - t).powi(3),
            EasingType::Quintic => 1.0 - (1.0 - t).powi(5),
            EasingType::EaseOut => expo_out(t),
        }
    }
}

#[inline]
fn step(t: f64) -> f64 {
    if t < 1.0 {
        0.0
    } else {
        1.0
    }
}

/// `min(1, 1.001 - 2^(-10t))`: fast start, long settle
#[inline]
fn expo_out(t: f64) -> f64 {
    (1.001 - 2.0_f64.powf(-10.0 * t)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [EasingType; 4] = [
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_curves_start_near_zero_and_end_at_one() {
        for curve in CURVES {
            assert!(curve.ease(0.0) < 0.01, "{:?} at t=0", curve);
            assert_eq!(curve.ease(1.0), 1.0, "{:?} at t=1", curve);
        }
        assert_eq!(EasingType::None.ease(0.99), 0.0);
        assert_eq!(EasingType::None.ease(1.0), 1.0);
    }

    #[test]
    fn test_curves_never_move_backwards() {
        for curve in CURVES {
            let mut prev = 0.0;
            for i in 0..=100 {
                let v = curve.ease(i as f64 / 100.0);
                assert!(v >= prev, "{:?} decreases at step {}", curve, i);
                prev = v;
            }
        }
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(EasingType::Cubic.ease(-1.0), 0.0);
        assert_eq!(EasingType::Cubic.ease(3.0), 1.0);
    }

    #[test]
    fn test_ease_out_front_loads_distance() {
        assert!(EasingType::EaseOut.ease(0.25) > 0.8);
        assert!(EasingType::Cubic.ease(0.25) > EasingType::Linear.ease(0.25));
    }
}
