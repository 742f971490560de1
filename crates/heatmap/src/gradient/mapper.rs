use std::sync::Arc;

use bevy::color::Srgba;
use bevy::prelude::*;

use crate::heatmap_error::HeatMapError;

use super::builder::build_table_with_profile;
use super::types::{ColorTable, ControlPoint, StepProfile, TemperatureRange};

// ---------------------------------------------------------------------------
// TemperatureColorMapper resource
// ---------------------------------------------------------------------------

/// Owns the active color table and answers temperature lookups in O(1).
///
/// Starts unbuilt; lookups fail with `NotInitialized` until the first
/// successful build. A rebuild constructs the new table off to the side and
/// swaps the `Arc` only on success, so a rejected configuration leaves the
/// previous table in place and readers never see a half-built one.
#[derive(Resource, Debug, Default)]
pub struct TemperatureColorMapper {
    table: Option<Arc<ColorTable>>,
    generation: u64,
}

impl TemperatureColorMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.table.is_some()
    }

    /// Number of successful builds so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn table(&self) -> Option<&ColorTable> {
        self.table.as_deref()
    }

    /// Shared handle to the current table for readers outside the ECS. The
    /// handle keeps pointing at the same table after later rebuilds.
    pub fn snapshot(&self) -> Option<Arc<ColorTable>> {
        self.table.clone()
    }

    pub fn build_table(
        &mut self,
        points: &[ControlPoint],
        range: TemperatureRange,
    ) -> Result<(), HeatMapError> {
        self.build_table_with_profile(points, range, &StepProfile::Uniform)
    }

    pub fn build_table_with_profile(
        &mut self,
        points: &[ControlPoint],
        range: TemperatureRange,
        profile: &StepProfile,
    ) -> Result<(), HeatMapError> {
        let table = build_table_with_profile(points, range, profile)?;
        self.table = Some(Arc::new(table));
        self.generation += 1;
        Ok(())
    }

    pub fn index_for_temperature(&self, temperature: f32) -> Result<usize, HeatMapError> {
        self.ready_table()
            .map(|table| table.index_for_temperature(temperature))
    }

    pub fn color_for_temperature(&self, temperature: f32) -> Result<Srgba, HeatMapError> {
        self.ready_table()
            .map(|table| table.color_for_temperature(temperature))
    }

    fn ready_table(&self) -> Result<&ColorTable, HeatMapError> {
        self.table.as_deref().ok_or(HeatMapError::NotInitialized)
    }
}
