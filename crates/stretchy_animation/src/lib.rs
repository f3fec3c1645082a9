//! Stretchy Animation System
//!
//! Spring physics that smooth a displayed value toward a logical target.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Damping Ratios**: Springs described by stiffness and damping ratio, with the
//!   usual stiffness/bounciness presets
//! - **Pluggable Interpolation**: Anything implementing [`Interpolator`] can drive
//!   an [`AnimatedFloat`]
//! - **Interruptible**: Retargeting mid-flight keeps the current velocity

pub mod animated;
pub mod interpolate;
pub mod spring;

pub use animated::AnimatedFloat;
pub use interpolate::{Interpolator, MotionState, Snap};
pub use spring::{damping_ratio, stiffness, SpringConfig};
