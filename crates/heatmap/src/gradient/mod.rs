//! Temperature-to-color gradient engine.
//!
//! A handful of weighted control points is expanded once into a
//! [`ColorTable`] with one color per whole degree of a [`TemperatureRange`].
//! Lookups are a floor, a subtraction and a clamp, so the overlay can color
//! every cell of a map without evaluating the gradient per pixel.

pub mod builder;
pub mod mapper;
pub mod types;


pub use builder::{build_table, build_table_with_profile, lerp_srgba};
pub use mapper::TemperatureColorMapper;
pub use types::{ColorTable, ControlPoint, StepProfile, TemperatureRange};
