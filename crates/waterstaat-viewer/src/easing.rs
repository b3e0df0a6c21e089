//! # Easing
//!
//! Interpolation helpers for UI transitions. All curves map `[0, 1]` onto
//! `[0, 1]` with `f(0) = 0` and `f(1) = 1`.

use crate::error::EasingError;

const BOUNCE_N1: f64 = 7.5625;
const BOUNCE_D1: f64 = 2.75;

/// Linear interpolation between `start` and `end`.
///
/// # Errors
///
/// [`EasingError::FactorOutOfRange`] if `factor` is outside `[0, 1]` or NaN.
///
/// ```rust
/// use waterstaat_viewer::easing::lerp;
///
/// assert_eq!(lerp(160.0, 240.0, 0.5).unwrap(), 200.0);
/// assert!(lerp(0.0, 1.0, 1.5).is_err());
/// ```
pub fn lerp(start: f64, end: f64, factor: f64) -> Result<f64, EasingError> {
    if !(0.0..=1.0).contains(&factor) {
        return Err(EasingError::FactorOutOfRange(factor));
    }
    Ok(start + (end - start) * factor)
}

pub fn ease_in_cubic(t: f64) -> f64 {
    t * t * t
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

pub fn ease_out_bounce(t: f64) -> f64 {
    if t < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * t * t
    } else if t < 2.0 / BOUNCE_D1 {
        let t = t - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.75
    } else if t < 2.5 / BOUNCE_D1 {
        let t = t - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.984375
    }
}

/// Named easing curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    InCubic,
    OutCubic,
    OutBounce,
}

impl Easing {
    /// Eased progress for `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> Result<f64, EasingError> {
        if !(0.0..=1.0).contains(&t) {
            return Err(EasingError::FactorOutOfRange(t));
        }
        let eased = match self {
            Easing::Linear => t,
            Easing::InCubic => ease_in_cubic(t),
            Easing::OutCubic => ease_out_cubic(t),
            Easing::OutBounce => ease_out_bounce(t),
        };
        // Rounding can push the bounce curve a hair past 1.
        Ok(eased.clamp(0.0, 1.0))
    }

    /// Value between `start` and `end` at progress `t` along this curve.
    pub fn interpolate(self, start: f64, end: f64, t: f64) -> Result<f64, EasingError> {
        lerp(start, end, self.apply(t)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(10.0, 20.0, 0.0).unwrap(), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0).unwrap(), 20.0);
        assert_eq!(lerp(20.0, 10.0, 0.25).unwrap(), 17.5);
    }

    #[test]
    fn test_lerp_rejects_factor_outside_unit_range() {
        assert_eq!(
            lerp(0.0, 1.0, -0.1),
            Err(EasingError::FactorOutOfRange(-0.1))
        );
        assert!(lerp(0.0, 1.0, 1.0001).is_err());
        assert!(lerp(0.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_curves_hit_both_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::InCubic,
            Easing::OutCubic,
            Easing::OutBounce,
        ] {
            assert!(close(easing.apply(0.0).unwrap(), 0.0), "{easing:?} at 0");
            assert!(close(easing.apply(1.0).unwrap(), 1.0), "{easing:?} at 1");
        }
    }

    #[test]
    fn test_cubic_curves() {
        assert!(close(ease_in_cubic(0.5), 0.125));
        assert!(close(ease_out_cubic(0.5), 0.875));
    }

    #[test]
    fn test_bounce_segments() {
        // First segment is a plain parabola.
        assert!(close(ease_out_bounce(0.2), 7.5625 * 0.04));
        // Each segment boundary is continuous.
        for boundary in [1.0 / 2.75, 2.0 / 2.75, 2.5 / 2.75] {
            let before = ease_out_bounce(boundary - 1e-9);
            let after = ease_out_bounce(boundary);
            assert!((before - after).abs() < 1e-6, "jump at {boundary}");
        }
        // Bounce peaks touch 1 between segments.
        assert!(close(ease_out_bounce(1.0 / 2.75), 1.0));
    }

    #[test]
    fn test_interpolate_uses_curve() {
        let value = Easing::InCubic.interpolate(100.0, 200.0, 0.5).unwrap();
        assert!(close(value, 112.5));
        assert!(Easing::OutBounce.interpolate(0.0, 1.0, 2.0).is_err());
    }
}
