use bevy::color::Srgba;

use crate::constants::MAX_TABLE_STEPS;
use crate::heatmap_error::HeatMapError;

use super::types::{ColorTable, ControlPoint, StepProfile, TemperatureRange};

// ---------------------------------------------------------------------------
// Table construction
// ---------------------------------------------------------------------------

/// Build a color table with one entry per whole degree of `range`.
///
/// Segment `i` runs from `points[i]` to `points[i + 1]` and covers a share of
/// the table proportional to `points[i].weight`; the last point's weight only
/// has to be valid. The final entry is always exactly the last point's color.
pub fn build_table(
    points: &[ControlPoint],
    range: TemperatureRange,
) -> Result<ColorTable, HeatMapError> {
    build_table_with_profile(points, range, &StepProfile::Uniform)
}

/// Like [`build_table`], but each step advances along the gradient by its
/// width in `profile` instead of by one unit.
pub fn build_table_with_profile(
    points: &[ControlPoint],
    range: TemperatureRange,
    profile: &StepProfile,
) -> Result<ColorTable, HeatMapError> {
    validate_points(points)?;

    let step_count = range.step_count();
    if step_count <= 0 {
        return Err(HeatMapError::InvalidConfiguration(format!(
            "temperature range [{}, {}) is empty",
            range.min, range.max
        )));
    }
    if step_count > MAX_TABLE_STEPS {
        return Err(HeatMapError::InvalidConfiguration(format!(
            "temperature range [{}, {}) has {} steps, more than the {} allowed",
            range.min, range.max, step_count, MAX_TABLE_STEPS
        )));
    }
    let step_count = step_count as usize;
    let widths = profile.resolve(step_count)?;

    let last = points[points.len() - 1].color;
    let mut colors = Vec::with_capacity(step_count);

    if points.len() == 1 {
        colors.resize(step_count, last);
    } else {
        let total_units: u64 = widths.iter().sum();
        let boundaries = segment_boundaries(points, total_units)?;

        let mut offset = 0u64;
        let mut segment = 0usize;
        for width in &widths {
            // boundaries[len - 1] == total_units > offset, so this stops in range.
            while offset >= boundaries[segment + 1] {
                segment += 1;
            }
            let start = boundaries[segment];
            let len = boundaries[segment + 1] - start;
            let t = ((offset - start) as f64 / len as f64) as f32;
            colors.push(lerp_srgba(
                points[segment].color,
                points[segment + 1].color,
                t,
            ));
            offset += width;
        }
    }

    if let Some(top) = colors.last_mut() {
        *top = last;
    }

    Ok(ColorTable::from_parts(range, colors))
}

fn validate_points(points: &[ControlPoint]) -> Result<(), HeatMapError> {
    if points.is_empty() {
        return Err(HeatMapError::InvalidConfiguration(
            "gradient needs at least one control point".to_string(),
        ));
    }
    if let Some((i, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| !p.weight.is_finite() || p.weight <= 0.0)
    {
        return Err(HeatMapError::InvalidConfiguration(format!(
            "control point {i} has non-positive weight {}",
            p.weight
        )));
    }
    Ok(())
}

/// Gradient-unit offsets where each segment starts, plus a closing entry
/// equal to `total_units`.
///
/// Every boundary is derived from its own weight prefix, so rounding never
/// accumulates from one segment into the next.
fn segment_boundaries(
    points: &[ControlPoint],
    total_units: u64,
) -> Result<Vec<u64>, HeatMapError> {
    let segment_weights = &points[..points.len() - 1];
    let weight_total: f64 = segment_weights.iter().map(|p| f64::from(p.weight)).sum();
    if !weight_total.is_finite() || weight_total <= 0.0 {
        return Err(HeatMapError::InvalidConfiguration(format!(
            "segment weights sum to {weight_total}"
        )));
    }

    let mut boundaries = Vec::with_capacity(points.len());
    let mut prefix = 0.0f64;
    for p in segment_weights {
        let share = (total_units as f64 * prefix / weight_total).floor() as u64;
        boundaries.push(share.min(total_units));
        prefix += f64::from(p.weight);
    }
    boundaries.push(total_units);
    Ok(boundaries)
}

/// Per-channel linear interpolation, clamped to `[0, 1]`.
pub fn lerp_srgba(start: Srgba, end: Srgba, t: f32) -> Srgba {
    let channel = |s: f32, e: f32| (s + (e - s) * t).clamp(0.0, 1.0);
    Srgba::new(
        channel(start.red, end.red),
        channel(start.green, end.green),
        channel(start.blue, end.blue),
        channel(start.alpha, end.alpha),
    )
}
