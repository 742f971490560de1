//! Temperature display units.
//!
//! Every temperature inside the crate is Celsius. Units only matter at the
//! edges: formatting a label, and reading a range endpoint that was typed in
//! the player's preferred unit.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// All available units for UI iteration.
    pub const ALL: [TemperatureUnit; 3] = [Self::Celsius, Self::Fahrenheit, Self::Kelvin];

    /// Human-readable label for display in settings UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Celsius => "Celsius",
            Self::Fahrenheit => "Fahrenheit",
            Self::Kelvin => "Kelvin",
        }
    }

    /// Short suffix appended to formatted temperatures.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
            Self::Kelvin => "K",
        }
    }

    /// Convert a Celsius value into this unit.
    pub fn from_celsius(self, celsius: f32) -> f32 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 1.8 + 32.0,
            Self::Kelvin => celsius + 273.15,
        }
    }

    /// Whole-degree conversion from Celsius, truncating toward zero.
    pub fn from_celsius_whole(self, celsius: i32) -> i32 {
        self.from_celsius(celsius as f32) as i32
    }

    /// Whole-degree conversion into Celsius, truncating toward zero and
    /// saturating at the `i32` limits.
    pub fn to_celsius_whole(self, value: i32) -> i32 {
        match self {
            Self::Celsius => value,
            Self::Kelvin => value.saturating_sub(273),
            Self::Fahrenheit => (value.saturating_sub(32) as f32 / 1.8) as i32,
        }
    }

    /// Format a Celsius temperature in this unit with no decimals, e.g. `"21C"`.
    pub fn format(self, celsius: f32) -> String {
        format!("{:.0}{}", self.from_celsius(celsius), self.suffix())
    }
}
