// ---------------------------------------------------------------------------
// HeatMapError: error types for color table construction and lookup
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors produced while building or reading a temperature color table.
///
/// A failed build never replaces the table a mapper already holds, so
/// callers can log the error and keep drawing with the previous colors.
#[derive(Debug, Clone, PartialEq)]
pub enum HeatMapError {
    /// Malformed control points, step widths, or a degenerate range.
    InvalidConfiguration(String),
    /// A lookup was attempted before any table was built.
    NotInitialized,
    /// Settings input could not be parsed.
    Config(String),
}

impl fmt::Display for HeatMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeatMapError::InvalidConfiguration(reason) => {
                write!(f, "Invalid heat map configuration: {reason}")
            }
            HeatMapError::NotInitialized => {
                write!(f, "Heat map color table has not been built yet")
            }
            HeatMapError::Config(msg) => write!(f, "Heat map settings error: {msg}"),
        }
    }
}

impl std::error::Error for HeatMapError {}

impl From<serde_json::Error> for HeatMapError {
    fn from(e: serde_json::Error) -> Self {
        HeatMapError::Config(e.to_string())
    }
}
