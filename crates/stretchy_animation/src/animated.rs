//! Animate-to-target values
//!
//! An [`AnimatedFloat`] keeps a displayed value that chases a logical target.
//! Changing the target never jumps the displayed value: the current velocity
//! carries over, so interrupted animations stay continuous.

use crate::interpolate::{Interpolator, MotionState};
use crate::spring::SpringConfig;

/// Longest single integration step; longer frames are subdivided
const MAX_STEP: f32 = 1.0 / 120.0;

#[derive(Clone, Debug)]
pub struct AnimatedFloat<I: Interpolator = SpringConfig> {
    interpolator: I,
    state: MotionState,
    target: f32,
}

impl<I: Interpolator> AnimatedFloat<I> {
    /// Start at rest on `initial`
    pub fn new(interpolator: I, initial: f32) -> Self {
        Self {
            interpolator,
            state: MotionState::at_rest(initial),
            target: initial,
        }
    }

    /// The displayed value
    pub fn value(&self) -> f32 {
        self.state.value
    }

    pub fn velocity(&self) -> f32 {
        self.state.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        if target != self.target {
            tracing::trace!(from = self.target, to = target, "retarget");
        }
        self.target = target;
    }

    /// Jump to `value` with no animation
    pub fn snap_to(&mut self, value: f32) {
        self.target = value;
        self.state = MotionState::at_rest(value);
    }

    pub fn is_settled(&self) -> bool {
        self.interpolator.is_at_rest(self.state, self.target)
            && self.state.value == self.target
    }

    /// Advance by `dt` seconds; returns true while still animating
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.is_settled() || dt <= 0.0 {
            return !self.is_settled();
        }

        let steps = (dt / MAX_STEP).ceil().max(1.0) as u32;
        let step_dt = dt / steps as f32;
        for _ in 0..steps {
            self.state = self.interpolator.step(self.state, self.target, step_dt);
        }
        !self.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolate::Snap;
    use crate::spring::{damping_ratio, stiffness};

    #[test]
    fn test_starts_settled() {
        let value = AnimatedFloat::new(SpringConfig::default(), 1.0);
        assert!(value.is_settled());
        assert_eq!(value.value(), 1.0);
    }

    #[test]
    fn test_settles_on_new_target() {
        let mut value = AnimatedFloat::new(
            SpringConfig::with_damping_ratio(stiffness::MEDIUM, 0.8),
            1.0,
        );
        value.set_target(1.1);
        assert_eq!(value.target(), 1.1);
        assert!(!value.is_settled());

        let mut frames = 0;
        while value.tick(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 600, "spring never settled");
        }
        assert_eq!(value.value(), 1.1);
    }

    #[test]
    fn test_retarget_keeps_velocity() {
        let mut value = AnimatedFloat::new(
            SpringConfig::with_damping_ratio(stiffness::LOW, damping_ratio::MEDIUM_BOUNCY),
            1.0,
        );
        value.set_target(1.3);
        for _ in 0..5 {
            value.tick(1.0 / 60.0);
        }

        let velocity = value.velocity();
        assert!(velocity > 0.0);

        value.set_target(1.0);
        assert_eq!(value.velocity(), velocity);
    }

    #[test]
    fn test_long_frame_is_subdivided() {
        let mut value = AnimatedFloat::new(
            SpringConfig::with_damping_ratio(stiffness::MEDIUM, 0.8),
            1.0,
        );
        value.set_target(1.1);

        // A single stalled frame must not blow up a stiff spring
        value.tick(0.5);
        assert!(value.value().is_finite());
        assert!((value.value() - 1.1).abs() < 0.01);
    }

    #[test]
    fn test_snap_interpolator() {
        let mut value = AnimatedFloat::new(Snap, 1.0);
        value.set_target(1.3);
        assert!(!value.tick(1.0 / 60.0));
        assert_eq!(value.value(), 1.3);
    }

    #[test]
    fn test_snap_to_skips_animation() {
        let mut value = AnimatedFloat::new(SpringConfig::default(), 1.0);
        value.set_target(1.3);
        value.tick(1.0 / 60.0);
        value.snap_to(1.0);
        assert!(value.is_settled());
        assert_eq!(value.velocity(), 0.0);
    }
}
