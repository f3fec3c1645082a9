//! Slider options
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```toml
//! initial_value = 80
//! fill_colors = ["#FFA726", "#FF7043"]
//! handle_colors = ["#FFD54F", "#FFA726"]
//! drag_sensitivity = 4.0
//! ```

use serde::{Deserialize, Serialize};
use stretchy_core::Color;

use crate::drag::DEFAULT_DRAG_SENSITIVITY;
use crate::error::{ConfigError, Result};
use crate::theme::SliderTheme;
use crate::value::{DEFAULT_VALUE, MAX_VALUE, MIN_VALUE};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub initial_value: i32,
    /// Fill gradient, top color first
    pub fill_colors: Vec<Color>,
    /// Handle gradient, top color first
    pub handle_colors: Vec<Color>,
    /// Pointer travel (dp) per value step
    pub drag_sensitivity: f32,
}

impl SliderConfig {
    /// Default options with a theme's colors
    pub fn themed(theme: SliderTheme) -> Self {
        Self {
            fill_colors: theme.fill_colors(),
            handle_colors: theme.handle_colors(),
            ..Self::default()
        }
    }

    pub fn initial_value(mut self, value: i32) -> Self {
        self.initial_value = value;
        self
    }

    pub fn fill_colors(mut self, colors: Vec<Color>) -> Self {
        self.fill_colors = colors;
        self
    }

    pub fn handle_colors(mut self, colors: Vec<Color>) -> Self {
        self.handle_colors = colors;
        self
    }

    pub fn drag_sensitivity(mut self, sensitivity: f32) -> Self {
        self.drag_sensitivity = sensitivity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_VALUE..=MAX_VALUE).contains(&self.initial_value) {
            return Err(ConfigError::InitialValueOutOfRange {
                value: self.initial_value,
                min: MIN_VALUE,
                max: MAX_VALUE,
            });
        }
        if !self.drag_sensitivity.is_finite() || self.drag_sensitivity <= 0.0 {
            return Err(ConfigError::InvalidSensitivity(self.drag_sensitivity));
        }
        if self.fill_colors.is_empty() {
            return Err(ConfigError::EmptyColors("fill_colors"));
        }
        if self.handle_colors.is_empty() {
            return Err(ConfigError::EmptyColors("handle_colors"));
        }
        Ok(())
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        let theme = SliderTheme::Teal;
        Self {
            initial_value: DEFAULT_VALUE,
            fill_colors: theme.fill_colors(),
            handle_colors: theme.handle_colors(),
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
        }
    }
}
