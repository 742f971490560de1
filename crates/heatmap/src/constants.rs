// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Number of hues in the configurable overlay palette.
pub const GRADIENT_STEPS: usize = 5;

/// Default palette hues in degrees: blue, cyan, green, yellow, red.
pub const DEFAULT_GRADIENT_HUES: [f32; GRADIENT_STEPS] = [240.0, 180.0, 120.0, 60.0, 0.0];

/// HSL saturation and lightness used to turn a palette hue into a color.
pub const PALETTE_SATURATION: f32 = 1.0;
pub const PALETTE_LIGHTNESS: f32 = 0.5;

/// Relative weight given to every palette hue.
pub const PALETTE_WEIGHT: f32 = 1.0;

// ---------------------------------------------------------------------------
// Opacity (percent)
// ---------------------------------------------------------------------------

pub const DEFAULT_OVERLAY_OPACITY: u8 = 30;
pub const MAX_OPACITY: u8 = 100;

/// The thermometer never goes fully transparent.
pub const DEFAULT_THERMOMETER_OPACITY: u8 = 30;
pub const MIN_THERMOMETER_OPACITY: u8 = 1;

// ---------------------------------------------------------------------------
// Temperature ranges (Celsius)
// ---------------------------------------------------------------------------

pub const DEFAULT_CUSTOM_RANGE_MIN: i32 = 0;
pub const DEFAULT_CUSTOM_RANGE_MAX: i32 = 40;

/// Bounds accepted for a custom range endpoint.
pub const CUSTOM_RANGE_LIMIT_MIN: i32 = -100;
pub const CUSTOM_RANGE_LIMIT_MAX: i32 = 100;

/// Largest color table accepted. The widest sanitized configuration (comfort
/// band across the whole custom limit, widened twice) stays below this.
pub const MAX_TABLE_STEPS: i64 = 1024;

/// Comfortable band of a typical colonist.
pub const DEFAULT_COMFORTABLE_MIN: f32 = 16.0;
pub const DEFAULT_COMFORTABLE_MAX: f32 = 26.0;

/// Degrees trimmed from each side of the comfortable band before it is used.
pub const COMFORT_INSET: i32 = 3;

/// The comfort-derived range extends this many band widths past each side.
pub const COMFORT_WIDEN_FACTOR: i32 = 2;

// ---------------------------------------------------------------------------
// Step widths
// ---------------------------------------------------------------------------

pub const DEFAULT_STEP_WIDTH: u32 = 1;

/// Steps inside the comfort band advance this many gradient units.
pub const COMFORT_STEP_WIDTH: u32 = 4;
