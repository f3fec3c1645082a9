//! Demo configuration (`stretchy.toml`)
//!
//! Each `[[sliders]]` entry starts from a theme and overrides single options:
//!
//! ```toml
//! [[sliders]]
//! theme = "amber"
//! initial_value = 90
//!
//! [[sliders]]
//! fill_colors = ["#222222", "#888888"]
//! drag_sensitivity = 2.5
//! ```
//!
//! Without any entries the demo shows the four built-in themes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stretchy_core::Color;
use stretchy_slider::{SliderConfig, SliderTheme};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub sliders: Vec<SliderEntry>,
}

/// One slider: a theme plus optional overrides
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SliderEntry {
    #[serde(default)]
    pub theme: SliderTheme,
    #[serde(default)]
    pub initial_value: Option<i32>,
    #[serde(default)]
    pub fill_colors: Option<Vec<Color>>,
    #[serde(default)]
    pub handle_colors: Option<Vec<Color>>,
    #[serde(default)]
    pub drag_sensitivity: Option<f32>,
}

impl SliderEntry {
    pub fn to_config(&self) -> SliderConfig {
        let mut config = SliderConfig::themed(self.theme);
        if let Some(value) = self.initial_value {
            config = config.initial_value(value);
        }
        if let Some(colors) = &self.fill_colors {
            config = config.fill_colors(colors.clone());
        }
        if let Some(colors) = &self.handle_colors {
            config = config.handle_colors(colors.clone());
        }
        if let Some(sensitivity) = self.drag_sensitivity {
            config = config.drag_sensitivity(sensitivity);
        }
        config
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Slider options in screen order, validated
    pub fn slider_configs(&self) -> Result<Vec<SliderConfig>> {
        if self.sliders.is_empty() {
            return Ok(SliderTheme::ALL
                .iter()
                .map(|&theme| SliderConfig::themed(theme))
                .collect());
        }
        self.sliders
            .iter()
            .enumerate()
            .map(|(i, entry)| -> Result<SliderConfig> {
                let config = entry.to_config();
                config
                    .validate()
                    .with_context(|| format!("Invalid options for slider {}", i))?;
                Ok(config)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_all_themes() {
        let configs = DemoConfig::default().slider_configs().unwrap();
        assert_eq!(configs.len(), 4);
        assert_eq!(configs[3].fill_colors, SliderTheme::Rainbow.fill_colors());
    }

    #[test]
    fn test_entries_override_theme() {
        let config = DemoConfig::parse(
            r##"
            [[sliders]]
            theme = "crimson"
            initial_value = 90

            [[sliders]]
            fill_colors = ["#222222"]
            drag_sensitivity = 2.5
            "##,
        )
        .unwrap();

        let configs = config.slider_configs().unwrap();
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[0].initial_value, 90);
        assert_eq!(configs[0].handle_colors, SliderTheme::Crimson.handle_colors());
        assert_eq!(configs[1].fill_colors, vec![Color::from_hex(0x222222)]);
        assert_eq!(configs[1].handle_colors, SliderTheme::Teal.handle_colors());
        assert_eq!(configs[1].drag_sensitivity, 2.5);
    }

    #[test]
    fn test_invalid_entry_is_reported() {
        let config = DemoConfig::parse(
            r##"
            [[sliders]]
            initial_value = 250
            "##,
        )
        .unwrap();

        let err = config.slider_configs().unwrap_err();
        assert!(format!("{:#}", err).contains("slider 0"));
    }

    #[test]
    fn test_unknown_theme_fails_to_parse() {
        assert!(DemoConfig::parse("[[sliders]]\ntheme = \"neon\"").is_err());
    }
}
