//! Presentation values derived from the slider value
//!
//! Nothing here is stored. The scale values are *targets*: the displayed
//! scales chase them on the springs returned by [`stretch_spring`] and
//! [`bounce_spring`].

use stretchy_animation::{damping_ratio, stiffness, SpringConfig};

use crate::value::{MAX_VALUE, MIN_VALUE};

pub const REST_SCALE: f32 = 1.0;
pub const STRETCH_AT_MAX: f32 = 1.3;
pub const BOUNCE_AT_MAX: f32 = 1.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentationDerived {
    pub is_at_max: bool,
    /// Track height multiplier
    pub stretch_scale_target: f32,
    /// Track width and handle size multiplier
    pub bounce_scale_target: f32,
    pub fill_ratio: f32,
}

impl PresentationDerived {
    pub fn from_value(value: i32) -> Self {
        let is_at_max = value == MAX_VALUE;
        Self {
            is_at_max,
            stretch_scale_target: if is_at_max { STRETCH_AT_MAX } else { REST_SCALE },
            bounce_scale_target: if is_at_max { BOUNCE_AT_MAX } else { REST_SCALE },
            fill_ratio: fill_ratio(value),
        }
    }
}

/// Filled fraction of the track
///
/// Clamped so an unvalidated initial value never paints outside the track.
pub fn fill_ratio(value: i32) -> f32 {
    value.clamp(MIN_VALUE, MAX_VALUE) as f32 / MAX_VALUE as f32
}

/// Soft, bouncy spring for the track stretch
pub fn stretch_spring() -> SpringConfig {
    SpringConfig::with_damping_ratio(stiffness::LOW, damping_ratio::MEDIUM_BOUNCY)
}

/// Quicker, nearly settled spring for the bounce
pub fn bounce_spring() -> SpringConfig {
    SpringConfig::with_damping_ratio(stiffness::MEDIUM, 0.8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_only_at_max() {
        for value in MIN_VALUE..MAX_VALUE {
            let p = PresentationDerived::from_value(value);
            assert!(!p.is_at_max, "value {value}");
            assert_eq!(p.stretch_scale_target, 1.0);
            assert_eq!(p.bounce_scale_target, 1.0);
        }

        let p = PresentationDerived::from_value(MAX_VALUE);
        assert!(p.is_at_max);
        assert_eq!(p.stretch_scale_target, 1.3);
        assert_eq!(p.bounce_scale_target, 1.1);
    }

    #[test]
    fn test_fill_ratio_is_linear() {
        assert_eq!(fill_ratio(0), 0.0);
        assert_eq!(fill_ratio(50), 0.5);
        assert_eq!(fill_ratio(100), 1.0);
        for value in MIN_VALUE..=MAX_VALUE {
            assert!((fill_ratio(value) - value as f32 / 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_fill_ratio_clamps_out_of_range() {
        assert_eq!(fill_ratio(150), 1.0);
        assert_eq!(fill_ratio(-5), 0.0);
    }

    #[test]
    fn test_curves() {
        let stretch = stretch_spring();
        let bounce = bounce_spring();
        assert!((stretch.damping_ratio() - 0.5).abs() < 1e-5);
        assert!((bounce.damping_ratio() - 0.8).abs() < 1e-5);
        assert!(stretch.stiffness < bounce.stiffness);
    }
}
