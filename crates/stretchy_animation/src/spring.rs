//! Spring physics animation
//!
//! RK4-integrated spring physics for smooth, natural animations.
//! Springs are usually described by stiffness and damping ratio, see
//! [`SpringConfig::with_damping_ratio`].

use crate::interpolate::{Interpolator, MotionState};

/// Common stiffness values (force per unit displacement, unit mass)
pub mod stiffness {
    pub const HIGH: f32 = 10_000.0;
    pub const MEDIUM: f32 = 1_500.0;
    pub const MEDIUM_LOW: f32 = 400.0;
    pub const LOW: f32 = 200.0;
    pub const VERY_LOW: f32 = 50.0;
}

/// Common damping ratios; 1.0 is critically damped, lower values overshoot
pub mod damping_ratio {
    pub const NO_BOUNCY: f32 = 1.0;
    pub const LOW_BOUNCY: f32 = 0.75;
    pub const MEDIUM_BOUNCY: f32 = 0.5;
    pub const HIGH_BOUNCY: f32 = 0.2;
}

/// Distance from the target below which a value counts as settled
const DEFAULT_REST_THRESHOLD: f32 = 0.01;

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Settling distance; velocity must also be under ten times this per second
    pub rest_threshold: f32,
}

impl SpringConfig {
    /// Create a new spring configuration
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_threshold: DEFAULT_REST_THRESHOLD,
        }
    }

    /// Unit-mass spring with damping expressed as a fraction of critical damping
    pub fn with_damping_ratio(stiffness: f32, ratio: f32) -> Self {
        let critical = 2.0 * stiffness.sqrt();
        Self::new(stiffness, ratio * critical, 1.0)
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    pub fn damping_ratio(&self) -> f32 {
        self.damping / self.critical_damping()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    fn acceleration(&self, x: f32, v: f32, target: f32) -> f32 {
        let spring_force = -self.stiffness * (x - target);
        let damping_force = -self.damping * v;
        (spring_force + damping_force) / self.mass
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::with_damping_ratio(stiffness::MEDIUM, damping_ratio::NO_BOUNCY)
    }
}

impl Interpolator for SpringConfig {
    /// One RK4 step; snaps to the target once at rest
    fn step(&self, state: MotionState, target: f32, dt: f32) -> MotionState {
        if self.is_at_rest(state, target) {
            return MotionState::at_rest(target);
        }

        let MotionState { value: x, velocity: v } = state;

        let k1_v = self.acceleration(x, v, target);
        let k1_x = v;

        let k2_v = self.acceleration(x + k1_x * dt * 0.5, v + k1_v * dt * 0.5, target);
        let k2_x = v + k1_v * dt * 0.5;

        let k3_v = self.acceleration(x + k2_x * dt * 0.5, v + k2_v * dt * 0.5, target);
        let k3_x = v + k2_v * dt * 0.5;

        let k4_v = self.acceleration(x + k3_x * dt, v + k3_v * dt, target);
        let k4_x = v + k3_v * dt;

        MotionState {
            value: x + (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0,
            velocity: v + (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0,
        }
    }

    fn is_at_rest(&self, state: MotionState, target: f32) -> bool {
        (state.value - target).abs() < self.rest_threshold
            && state.velocity.abs() < self.rest_threshold * 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(config: &SpringConfig, from: f32, target: f32, steps: usize) -> MotionState {
        let mut state = MotionState::at_rest(from);
        for _ in 0..steps {
            state = config.step(state, target, 1.0 / 60.0);
        }
        state
    }

    #[test]
    fn test_damping_ratio_roundtrip() {
        let config = SpringConfig::with_damping_ratio(stiffness::LOW, 0.5);
        assert!((config.damping_ratio() - 0.5).abs() < 1e-5);
        assert!(config.is_underdamped());

        let critical =
            SpringConfig::with_damping_ratio(stiffness::MEDIUM, damping_ratio::NO_BOUNCY);
        assert!((critical.damping_ratio() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_spring_settles_to_target() {
        let config = SpringConfig::with_damping_ratio(stiffness::MEDIUM, 0.8);
        let state = run(&config, 1.0, 1.1, 120);

        assert!(config.is_at_rest(state, 1.1));
        assert_eq!(state, MotionState::at_rest(1.1));
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let config = SpringConfig::with_damping_ratio(stiffness::LOW, damping_ratio::MEDIUM_BOUNCY);
        let mut state = MotionState::at_rest(1.0);
        let mut peak = state.value;
        for _ in 0..180 {
            state = config.step(state, 1.3, 1.0 / 60.0);
            peak = peak.max(state.value);
        }

        assert!(peak > 1.32, "peak was {peak}");
        assert!(config.is_at_rest(state, 1.3));
    }

    #[test]
    fn test_spring_rk4_stability() {
        let config = SpringConfig::with_damping_ratio(stiffness::LOW, damping_ratio::MEDIUM_BOUNCY);
        let mut state = MotionState::at_rest(0.0);

        // Large time step that might cause instability with Euler integration
        for _ in 0..100 {
            state = config.step(state, 100.0, 0.05);
            assert!(state.value < 200.0);
            assert!(state.value > -100.0);
        }
    }

    #[test]
    fn test_spring_different_mass() {
        let config = SpringConfig::new(400.0, 50.0, 2.0);
        let state = run(&config, 0.0, 1.0, 240);

        assert!(state.value.is_finite());
        assert!(config.is_at_rest(state, 1.0));
    }
}
