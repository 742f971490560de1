//! Derivation of the mapped temperature range and the comfort band.
//!
//! The overlay either centers its range on the band a colonist finds
//! comfortable, or uses a range the player typed in. Both policies share the
//! same comfort band, which drives step emphasis.

use crate::constants::{
    COMFORT_INSET, COMFORT_STEP_WIDTH, COMFORT_WIDEN_FACTOR, DEFAULT_STEP_WIDTH, MAX_TABLE_STEPS,
};
use crate::gradient::{StepProfile, TemperatureRange};

// ---------------------------------------------------------------------------
// ComfortBand
// ---------------------------------------------------------------------------

/// Inclusive whole-degree band `[min, max]` (Celsius) considered comfortable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComfortBand {
    pub min: i32,
    pub max: i32,
}

impl ComfortBand {
    /// Band from raw comfortable limits, truncated to whole degrees and
    /// pulled in by `COMFORT_INSET` on both sides.
    pub fn from_comfortable(comfortable_min: f32, comfortable_max: f32) -> Self {
        Self {
            min: (comfortable_min as i32).saturating_add(COMFORT_INSET),
            max: (comfortable_max as i32).saturating_sub(COMFORT_INSET),
        }
    }

    pub fn width(&self) -> i32 {
        self.max.saturating_sub(self.min)
    }

    /// Whether the step at `temperature` gets the wide comfort stride. The
    /// degree just below the band is included so the band's lower edge is
    /// already inside the emphasized region.
    pub fn emphasizes(&self, temperature: i32) -> bool {
        temperature >= self.min.saturating_sub(1) && temperature <= self.max
    }

    /// One width per step of `range`: `COMFORT_STEP_WIDTH` inside the band,
    /// `DEFAULT_STEP_WIDTH` elsewhere. Ranges that cannot be built (empty or
    /// over `MAX_TABLE_STEPS`) fall back to `Uniform` instead of allocating
    /// widths; the build rejects them anyway.
    pub fn step_profile(&self, range: TemperatureRange) -> StepProfile {
        if !(1..=MAX_TABLE_STEPS).contains(&range.step_count()) {
            return StepProfile::Uniform;
        }
        let widths = (range.min..range.max)
            .map(|t| {
                if self.emphasizes(t) {
                    COMFORT_STEP_WIDTH
                } else {
                    DEFAULT_STEP_WIDTH
                }
            })
            .collect();
        StepProfile::Widths(widths)
    }
}

// ---------------------------------------------------------------------------
// RangePolicy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangePolicy {
    /// Range centered on the comfort band, `COMFORT_WIDEN_FACTOR` band widths
    /// past each side.
    Comfort {
        comfortable_min: f32,
        comfortable_max: f32,
    },
    /// Player-supplied range `[min, max)` in Celsius.
    Custom {
        min: i32,
        max: i32,
        comfortable_min: f32,
        comfortable_max: f32,
    },
}

impl RangePolicy {
    pub fn comfort_band(&self) -> ComfortBand {
        match *self {
            RangePolicy::Comfort {
                comfortable_min,
                comfortable_max,
            }
            | RangePolicy::Custom {
                comfortable_min,
                comfortable_max,
                ..
            } => ComfortBand::from_comfortable(comfortable_min, comfortable_max),
        }
    }

    /// The mapped range. A degenerate result is returned as-is; building a
    /// table from it fails and the previous table stays in use.
    pub fn temperature_range(&self) -> TemperatureRange {
        match *self {
            RangePolicy::Comfort { .. } => {
                let band = self.comfort_band();
                let widen = band.width().saturating_mul(COMFORT_WIDEN_FACTOR);
                TemperatureRange::new(
                    band.min.saturating_sub(widen),
                    band.max.saturating_add(widen),
                )
            }
            RangePolicy::Custom { min, max, .. } => TemperatureRange::new(min, max),
        }
    }
}
