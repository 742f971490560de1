use bevy::prelude::*;

use crate::gradient::{TemperatureColorMapper, TemperatureRange};
use crate::settings::HeatMapSettings;
use crate::thermometer::OutdoorThermometer;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Fired after the color table was successfully replaced.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTableRebuilt {
    /// Mapper generation after the rebuild.
    pub generation: u64,
    /// Range covered by the new table.
    pub range: TemperatureRange,
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Rebuilds the color table whenever `HeatMapSettings` changes.
///
/// The first run always sees the settings as changed, so a table exists from
/// the first frame on. A rejected configuration is logged and the previous
/// table keeps serving lookups.
pub fn rebuild_color_table(
    settings: Res<HeatMapSettings>,
    mut mapper: ResMut<TemperatureColorMapper>,
    mut events: EventWriter<ColorTableRebuilt>,
) {
    if !settings.is_changed() {
        return;
    }

    let range = settings.temperature_range();
    let result = mapper.build_table_with_profile(
        &settings.control_points(),
        range,
        &settings.step_profile(),
    );

    match result {
        Ok(()) => {
            info!(
                "Heat map color table rebuilt: [{}, {}) with {} steps (generation {})",
                range.min,
                range.max,
                range.step_count(),
                mapper.generation()
            );
            events.send(ColorTableRebuilt {
                generation: mapper.generation(),
                range,
            });
        }
        Err(e) => {
            warn!(
                "Heat map color table rebuild rejected, keeping generation {}: {}",
                mapper.generation(),
                e
            );
        }
    }
}

/// Clears cached thermometer swatches once the table they came from is gone.
pub fn invalidate_thermometer_cache(
    mut events: EventReader<ColorTableRebuilt>,
    mut thermometer: ResMut<OutdoorThermometer>,
) {
    if events.read().last().is_some() {
        thermometer.invalidate();
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct HeatMapPlugin;

impl Plugin for HeatMapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeatMapSettings>()
            .init_resource::<TemperatureColorMapper>()
            .init_resource::<OutdoorThermometer>()
            .add_event::<ColorTableRebuilt>()
            .add_systems(
                Update,
                (rebuild_color_table, invalidate_thermometer_cache).chain(),
            );
    }
}
