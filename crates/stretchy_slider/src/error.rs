//! Error types for stretchy_slider

use thiserror::Error;

/// Rejected slider configuration
///
/// Interaction itself never fails; only building a slider from options can.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Initial value outside the slider range
    #[error("initial value {value} is outside {min}..={max}")]
    InitialValueOutOfRange { value: i32, min: i32, max: i32 },

    /// Drag sensitivity must be a positive, finite divisor
    #[error("drag sensitivity must be positive and finite, got {0}")]
    InvalidSensitivity(f32),

    /// A gradient needs at least one color
    #[error("`{0}` needs at least one color")]
    EmptyColors(&'static str),
}

/// Result type for stretchy_slider operations
pub type Result<T> = std::result::Result<T, ConfigError>;
