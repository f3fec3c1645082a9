//! Built-in color themes

use serde::{Deserialize, Serialize};
use stretchy_core::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderTheme {
    #[default]
    Teal,
    Amber,
    Crimson,
    Rainbow,
}

impl SliderTheme {
    /// Every theme, in demo order
    pub const ALL: [SliderTheme; 4] = [
        SliderTheme::Teal,
        SliderTheme::Amber,
        SliderTheme::Crimson,
        SliderTheme::Rainbow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SliderTheme::Teal => "teal",
            SliderTheme::Amber => "amber",
            SliderTheme::Crimson => "crimson",
            SliderTheme::Rainbow => "rainbow",
        }
    }

    /// Fill gradient, top color first
    pub fn fill_colors(&self) -> Vec<Color> {
        match self {
            SliderTheme::Teal => vec![Color::from_hex(0x76C7C0), Color::from_hex(0x50B8B3)],
            SliderTheme::Amber => vec![Color::from_hex(0xFFA726), Color::from_hex(0xFF7043)],
            SliderTheme::Crimson => vec![Color::from_hex(0xFFCDD2), Color::from_hex(0xEF5350)],
            SliderTheme::Rainbow => vec![Color::RED, Color::YELLOW, Color::GREEN, Color::BLUE],
        }
    }

    /// Handle gradient, top color first
    pub fn handle_colors(&self) -> Vec<Color> {
        match self {
            SliderTheme::Teal => vec![Color::from_hex(0x76C7C0), Color::from_hex(0x50B8B3)],
            SliderTheme::Amber => vec![Color::from_hex(0xFFD54F), Color::from_hex(0xFFA726)],
            SliderTheme::Crimson => vec![Color::from_hex(0xFF5252), Color::from_hex(0xD32F2F)],
            SliderTheme::Rainbow => vec![Color::CYAN, Color::MAGENTA],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_has_colors() {
        for theme in SliderTheme::ALL {
            assert!(theme.fill_colors().len() >= 2, "{}", theme.name());
            assert!(theme.handle_colors().len() >= 2, "{}", theme.name());
        }
    }

    #[test]
    fn test_rainbow_fill_order() {
        assert_eq!(
            SliderTheme::Rainbow.fill_colors(),
            vec![Color::RED, Color::YELLOW, Color::GREEN, Color::BLUE]
        );
    }
}
