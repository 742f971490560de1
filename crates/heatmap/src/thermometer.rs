//! Outdoor thermometer readout.
//!
//! The widget shows the outdoor temperature as a label on a swatch colored
//! by the heat map table. Swatches are cached per table index because the
//! outdoor temperature rarely moves more than a degree between frames.
//! A hidden thermometer yields no readout and leaves the cache alone.

use std::collections::HashMap;

use bevy::color::Srgba;
use bevy::prelude::*;

use crate::gradient::TemperatureColorMapper;
use crate::heatmap_error::HeatMapError;
use crate::settings::HeatMapSettings;

/// What the thermometer should draw for one temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermometerReadout {
    /// Color table index the swatch was taken from.
    pub index: usize,
    /// Table color with the thermometer opacity applied.
    pub swatch: Srgba,
    /// Temperature formatted in the configured unit, e.g. `"21C"`.
    pub label: String,
}

#[derive(Resource, Debug, Default)]
pub struct OutdoorThermometer {
    swatches: HashMap<usize, Srgba>,
    /// Opacity (percent) the cached swatches were made with.
    cached_opacity: u8,
}

impl OutdoorThermometer {
    /// `Ok(None)` while `show_outdoor_thermometer` is off.
    pub fn readout(
        &mut self,
        mapper: &TemperatureColorMapper,
        settings: &HeatMapSettings,
        temperature: f32,
    ) -> Result<Option<ThermometerReadout>, HeatMapError> {
        if !settings.show_outdoor_thermometer {
            return Ok(None);
        }
        let index = mapper.index_for_temperature(temperature)?;

        if self.cached_opacity != settings.thermometer_opacity {
            self.swatches.clear();
            self.cached_opacity = settings.thermometer_opacity;
        }

        let swatch = match self.swatches.get(&index) {
            Some(&swatch) => swatch,
            None => {
                let color = mapper.color_for_temperature(temperature)?;
                let swatch = Srgba {
                    alpha: settings.thermometer_alpha(),
                    ..color
                };
                self.swatches.insert(index, swatch);
                swatch
            }
        };

        Ok(Some(ThermometerReadout {
            index,
            swatch,
            label: settings.unit.format(temperature),
        }))
    }

    /// Drop all cached swatches; called whenever the color table is replaced.
    pub fn invalidate(&mut self) {
        self.swatches.clear();
    }

    pub fn cached_swatches(&self) -> usize {
        self.swatches.len()
    }
}
