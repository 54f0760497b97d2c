use std::fmt;

/// Errors raised while validating a run before it starts.
///
/// The simulation core itself has no failure modes: degenerate states
/// (exhausted piles, stale memory, blocked edges) resolve through the
/// ant state machine, not through errors.
#[derive(Debug)]
pub enum ConfigError {
    /// A configuration value falls outside its declared bounds
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },
    /// A scripted layout references a cell outside the grid
    CellOutOfGrid {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{} = {} is outside [{}, {}]", field, value, min, max),
            ConfigError::CellOutOfGrid {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "cell ({}, {}) lies outside the {}x{} grid",
                x, y, width, height
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, ConfigError>;
