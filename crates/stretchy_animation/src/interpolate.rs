//! Interpolation strategies
//!
//! An [`Interpolator`] advances a displayed value toward a target over a time
//! step. It owns no state of its own; the position and velocity travel in a
//! [`MotionState`] so one interpolator can drive many values.

/// Displayed position and its velocity (units per second)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub value: f32,
    pub velocity: f32,
}

impl MotionState {
    pub const fn new(value: f32, velocity: f32) -> Self {
        Self { value, velocity }
    }

    pub const fn at_rest(value: f32) -> Self {
        Self::new(value, 0.0)
    }
}

pub trait Interpolator {
    /// Advance `state` toward `target` by `dt` seconds
    fn step(&self, state: MotionState, target: f32, dt: f32) -> MotionState;

    /// Whether `state` is close enough to `target` to stop animating
    fn is_at_rest(&self, state: MotionState, target: f32) -> bool;
}

/// Jumps straight to the target on the first step
#[derive(Clone, Copy, Debug, Default)]
pub struct Snap;

impl Interpolator for Snap {
    fn step(&self, _state: MotionState, target: f32, _dt: f32) -> MotionState {
        MotionState::at_rest(target)
    }

    fn is_at_rest(&self, state: MotionState, target: f32) -> bool {
        state.value == target && state.velocity == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_reaches_target_in_one_step() {
        let next = Snap.step(MotionState::new(1.0, 3.0), 1.3, 1.0 / 60.0);
        assert_eq!(next, MotionState::at_rest(1.3));
        assert!(Snap.is_at_rest(next, 1.3));
    }
}
