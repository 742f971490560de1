use bevy::color::{Color, Srgba};

use crate::constants::DEFAULT_STEP_WIDTH;
use crate::heatmap_error::HeatMapError;

// ---------------------------------------------------------------------------
// Control points
// ---------------------------------------------------------------------------

/// One anchor of the gradient: a color and the relative share of the table
/// its outgoing segment should cover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub color: Srgba,
    pub weight: f32,
}

impl ControlPoint {
    pub fn new(color: impl Into<Color>, weight: f32) -> Self {
        Self {
            color: color.into().to_srgba(),
            weight,
        }
    }
}

// ---------------------------------------------------------------------------
// TemperatureRange
// ---------------------------------------------------------------------------

/// Whole-degree interval `[min, max)` covered by a color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemperatureRange {
    pub min: i32,
    pub max: i32,
}

impl TemperatureRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Number of one-degree steps; zero or negative for a degenerate range.
    pub fn step_count(&self) -> i64 {
        i64::from(self.max) - i64::from(self.min)
    }

    pub fn contains(&self, temperature: i32) -> bool {
        (self.min..self.max).contains(&temperature)
    }
}

// ---------------------------------------------------------------------------
// StepProfile
// ---------------------------------------------------------------------------

/// How far each table step advances along the gradient.
///
/// With `Uniform` every step is one unit. `Widths` gives one positive width
/// per step, so wider steps sweep through more of the palette.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StepProfile {
    #[default]
    Uniform,
    Widths(Vec<u32>),
}

impl StepProfile {
    /// Expand into one width per step for a table of `step_count` entries.
    pub fn resolve(&self, step_count: usize) -> Result<Vec<u64>, HeatMapError> {
        match self {
            StepProfile::Uniform => Ok(vec![u64::from(DEFAULT_STEP_WIDTH); step_count]),
            StepProfile::Widths(widths) => {
                if widths.len() != step_count {
                    return Err(HeatMapError::InvalidConfiguration(format!(
                        "step profile has {} widths for a table of {} steps",
                        widths.len(),
                        step_count
                    )));
                }
                if let Some(pos) = widths.iter().position(|&w| w == 0) {
                    return Err(HeatMapError::InvalidConfiguration(format!(
                        "step width at index {pos} is zero"
                    )));
                }
                Ok(widths.iter().map(|&w| u64::from(w)).collect())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// ColorTable
// ---------------------------------------------------------------------------

/// Precomputed colors, one per whole degree of `range`.
///
/// Never empty: construction goes through the builder, which rejects
/// degenerate ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
    range: TemperatureRange,
    colors: Box<[Srgba]>,
}

impl ColorTable {
    pub(crate) fn from_parts(range: TemperatureRange, colors: Vec<Srgba>) -> Self {
        debug_assert!(!colors.is_empty());
        debug_assert_eq!(colors.len() as i64, range.step_count());
        Self {
            range,
            colors: colors.into_boxed_slice(),
        }
    }

    pub fn range(&self) -> TemperatureRange {
        self.range
    }

    pub fn colors(&self) -> &[Srgba] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Srgba> {
        self.colors.get(index).copied()
    }

    /// Table index for a temperature: `floor(t) - min`, clamped to the table.
    /// Non-finite input clamps too (NaN lands on the 0 degree slot).
    #[inline]
    pub fn index_for_temperature(&self, temperature: f32) -> usize {
        let last = self.colors.len().saturating_sub(1) as i64;
        let idx = (temperature.floor() as i64).saturating_sub(i64::from(self.range.min));
        idx.clamp(0, last) as usize
    }

    #[inline]
    pub fn color_for_temperature(&self, temperature: f32) -> Srgba {
        self.colors[self.index_for_temperature(temperature)]
    }
}
