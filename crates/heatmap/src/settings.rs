//! Player-facing heat map configuration.
//!
//! `HeatMapSettings` is the single source the color table is rebuilt from.
//! Any change to the resource triggers a rebuild (see `plugin.rs`).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::gradient::{ControlPoint, StepProfile, TemperatureRange};
use crate::heatmap_error::HeatMapError;
use crate::range_policy::{ComfortBand, RangePolicy};
use crate::units::TemperatureUnit;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatMapSettings {
    /// Palette hues in degrees, coldest first.
    pub gradient_hues: [f32; GRADIENT_STEPS],
    /// Map overlay opacity in percent (0-100).
    pub overlay_opacity: u8,
    /// Thermometer swatch opacity in percent (1-100).
    pub thermometer_opacity: u8,
    /// Whether the outdoor thermometer is drawn at all.
    pub show_outdoor_thermometer: bool,
    /// Use `custom_range_min..custom_range_max` instead of the comfort-derived range.
    pub use_custom_range: bool,
    /// Custom range endpoints in Celsius.
    pub custom_range_min: i32,
    pub custom_range_max: i32,
    /// Raw comfortable temperature limits (Celsius) reported by the host.
    pub comfortable_min: f32,
    pub comfortable_max: f32,
    /// Give comfort-band steps a wider stride through the palette.
    pub emphasize_comfort: bool,
    /// Unit used for labels and custom range entry.
    pub unit: TemperatureUnit,
}

impl Default for HeatMapSettings {
    fn default() -> Self {
        Self {
            gradient_hues: DEFAULT_GRADIENT_HUES,
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
            thermometer_opacity: DEFAULT_THERMOMETER_OPACITY,
            show_outdoor_thermometer: true,
            use_custom_range: false,
            custom_range_min: DEFAULT_CUSTOM_RANGE_MIN,
            custom_range_max: DEFAULT_CUSTOM_RANGE_MAX,
            comfortable_min: DEFAULT_COMFORTABLE_MIN,
            comfortable_max: DEFAULT_COMFORTABLE_MAX,
            emphasize_comfort: true,
            unit: TemperatureUnit::Celsius,
        }
    }
}

impl HeatMapSettings {
    /// Parse settings from JSON. Missing fields take their defaults and the
    /// result is sanitized.
    pub fn from_json(json: &str) -> Result<Self, HeatMapError> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    pub fn to_json(&self) -> Result<String, HeatMapError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The palette as equally weighted control points.
    pub fn control_points(&self) -> Vec<ControlPoint> {
        self.gradient_hues
            .iter()
            .map(|&hue| {
                ControlPoint::new(
                    Color::hsl(hue, PALETTE_SATURATION, PALETTE_LIGHTNESS),
                    PALETTE_WEIGHT,
                )
            })
            .collect()
    }

    pub fn range_policy(&self) -> RangePolicy {
        if self.use_custom_range {
            RangePolicy::Custom {
                min: self.custom_range_min,
                max: self.custom_range_max,
                comfortable_min: self.comfortable_min,
                comfortable_max: self.comfortable_max,
            }
        } else {
            RangePolicy::Comfort {
                comfortable_min: self.comfortable_min,
                comfortable_max: self.comfortable_max,
            }
        }
    }

    pub fn temperature_range(&self) -> TemperatureRange {
        self.range_policy().temperature_range()
    }

    pub fn comfort_band(&self) -> ComfortBand {
        self.range_policy().comfort_band()
    }

    pub fn step_profile(&self) -> StepProfile {
        if self.emphasize_comfort {
            self.comfort_band().step_profile(self.temperature_range())
        } else {
            StepProfile::Uniform
        }
    }

    pub fn overlay_alpha(&self) -> f32 {
        f32::from(self.overlay_opacity.min(MAX_OPACITY)) / 100.0
    }

    pub fn thermometer_alpha(&self) -> f32 {
        f32::from(
            self.thermometer_opacity
                .clamp(MIN_THERMOMETER_OPACITY, MAX_OPACITY),
        ) / 100.0
    }

    /// Set the custom range minimum from a value in `unit`. The maximum is
    /// pushed up when it would no longer be above the new minimum.
    pub fn set_custom_range_min(&mut self, value: i32, unit: TemperatureUnit) {
        self.custom_range_min = unit
            .to_celsius_whole(value)
            .clamp(CUSTOM_RANGE_LIMIT_MIN, CUSTOM_RANGE_LIMIT_MAX - 1);
        if self.custom_range_max <= self.custom_range_min {
            self.custom_range_max = self.custom_range_min + 1;
        }
    }

    /// Set the custom range maximum from a value in `unit`. The minimum is
    /// pushed down when it would no longer be below the new maximum.
    pub fn set_custom_range_max(&mut self, value: i32, unit: TemperatureUnit) {
        self.custom_range_max = unit
            .to_celsius_whole(value)
            .clamp(CUSTOM_RANGE_LIMIT_MIN + 1, CUSTOM_RANGE_LIMIT_MAX);
        if self.custom_range_min >= self.custom_range_max {
            self.custom_range_min = self.custom_range_max - 1;
        }
    }

    /// Custom range endpoints expressed in `unit`, for prefilling input fields.
    pub fn custom_range_in(&self, unit: TemperatureUnit) -> (i32, i32) {
        (
            unit.from_celsius_whole(self.custom_range_min),
            unit.from_celsius_whole(self.custom_range_max),
        )
    }

    /// Clamp every field into its valid domain.
    pub fn sanitized(mut self) -> Self {
        for hue in &mut self.gradient_hues {
            *hue = if hue.is_finite() {
                hue.rem_euclid(360.0)
            } else {
                0.0
            };
        }
        self.overlay_opacity = self.overlay_opacity.min(MAX_OPACITY);
        self.thermometer_opacity = self
            .thermometer_opacity
            .clamp(MIN_THERMOMETER_OPACITY, MAX_OPACITY);

        let (min, max) = (self.custom_range_min, self.custom_range_max);
        self.set_custom_range_min(min, TemperatureUnit::Celsius);
        self.set_custom_range_max(max.max(self.custom_range_min + 1), TemperatureUnit::Celsius);

        if !self.comfortable_min.is_finite() || !self.comfortable_max.is_finite() {
            self.comfortable_min = DEFAULT_COMFORTABLE_MIN;
            self.comfortable_max = DEFAULT_COMFORTABLE_MAX;
        } else if self.comfortable_min > self.comfortable_max {
            std::mem::swap(&mut self.comfortable_min, &mut self.comfortable_max);
        }
        let limits = (CUSTOM_RANGE_LIMIT_MIN as f32, CUSTOM_RANGE_LIMIT_MAX as f32);
        self.comfortable_min = self.comfortable_min.clamp(limits.0, limits.1);
        self.comfortable_max = self.comfortable_max.clamp(limits.0, limits.1);
        self
    }
}
