//! Overlay tints for map cells.

use bevy::color::Srgba;

use crate::gradient::TemperatureColorMapper;
use crate::heatmap_error::HeatMapError;
use crate::settings::HeatMapSettings;

/// Table color for `temperature` with the configured overlay opacity as alpha.
pub fn overlay_color(
    mapper: &TemperatureColorMapper,
    settings: &HeatMapSettings,
    temperature: f32,
) -> Result<Srgba, HeatMapError> {
    let color = mapper.color_for_temperature(temperature)?;
    Ok(Srgba {
        alpha: settings.overlay_alpha(),
        ..color
    })
}

/// Alpha-composite `tint` over an opaque `base`.
pub fn blend_over(base: Srgba, tint: Srgba) -> Srgba {
    let a = tint.alpha;
    Srgba::rgb(
        base.red * (1.0 - a) + tint.red * a,
        base.green * (1.0 - a) + tint.green * a,
        base.blue * (1.0 - a) + tint.blue * a,
    )
}

/// Final color of a map cell at `temperature` drawn on top of `base`.
pub fn tinted_cell_color(
    mapper: &TemperatureColorMapper,
    settings: &HeatMapSettings,
    base: Srgba,
    temperature: f32,
) -> Result<Srgba, HeatMapError> {
    overlay_color(mapper, settings, temperature).map(|tint| blend_over(base, tint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::{ControlPoint, TemperatureRange};

    fn rgb(c: Srgba) -> (f32, f32, f32) {
        (c.red, c.green, c.blue)
    }

    fn ready_mapper() -> TemperatureColorMapper {
        let mut mapper = TemperatureColorMapper::new();
        mapper
            .build_table(
                &[
                    ControlPoint::new(Srgba::rgb(0.0, 0.0, 1.0), 1.0),
                    ControlPoint::new(Srgba::rgb(1.0, 0.0, 0.0), 1.0),
                ],
                TemperatureRange::new(0, 10),
            )
            .expect("valid gradient");
        mapper
    }

    #[test]
    fn test_overlay_color_uses_overlay_opacity() {
        let settings = HeatMapSettings {
            overlay_opacity: 40,
            ..Default::default()
        };
        let color = overlay_color(&ready_mapper(), &settings, -3.0).expect("ready");
        assert_eq!(rgb(color), (0.0, 0.0, 1.0));
        assert!((color.alpha - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_overlay_color_requires_table() {
        let mapper = TemperatureColorMapper::new();
        let err = overlay_color(&mapper, &HeatMapSettings::default(), 20.0).unwrap_err();
        assert_eq!(err, HeatMapError::NotInitialized);
    }

    #[test]
    fn test_blend_over_identity_at_zero_alpha() {
        let base = Srgba::rgb(0.5, 0.5, 0.5);
        let tint = Srgba::new(1.0, 0.0, 0.0, 0.0);
        let result = rgb(blend_over(base, tint));
        assert!((result.0 - 0.5).abs() < 1e-6);
        assert!((result.1 - 0.5).abs() < 1e-6);
        assert!((result.2 - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_tinted_cell_color_mixes_toward_table_color() {
        let settings = HeatMapSettings {
            overlay_opacity: 50,
            ..Default::default()
        };
        let base = Srgba::rgb(0.0, 1.0, 0.0);
        let (r, g, b) =
            rgb(tinted_cell_color(&ready_mapper(), &settings, base, 99.0).expect("ready"));
        assert!((r - 0.5).abs() < 1e-6);
        assert!((g - 0.5).abs() < 1e-6);
        assert!(b.abs() < 1e-6);
    }
}
