//! Temperature heat map overlay.
//!
//! Turns temperatures into overlay colors through a precomputed
//! [`gradient::ColorTable`]. [`HeatMapPlugin`] owns the table as a resource
//! and rebuilds it whenever [`HeatMapSettings`] changes; overlay and
//! thermometer code read colors from the [`TemperatureColorMapper`] resource.

pub mod constants;
pub mod gradient;
pub mod heatmap_error;
pub mod overlay;
pub mod plugin;
pub mod range_policy;
pub mod settings;
pub mod thermometer;
pub mod units;

pub use gradient::{
    build_table, build_table_with_profile, ColorTable, ControlPoint, StepProfile,
    TemperatureColorMapper, TemperatureRange,
};
pub use heatmap_error::HeatMapError;
pub use overlay::{blend_over, overlay_color, tinted_cell_color};
pub use plugin::{ColorTableRebuilt, HeatMapPlugin};
pub use range_policy::{ComfortBand, RangePolicy};
pub use settings::HeatMapSettings;
pub use thermometer::{OutdoorThermometer, ThermometerReadout};
pub use units::TemperatureUnit;
