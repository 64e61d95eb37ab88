//! LiquidError - everything the engine can reject
//!
//! Errors are only ever raised at the edges (construction, configuration,
//! coordinate-addressed commands and reads). A tick never fails.

use std::fmt;

/// Error returned by grid construction, configuration and cell commands.
#[derive(Debug, Clone, PartialEq)]
pub enum LiquidError {
    /// Invalid grid dimensions, tunables or config document.
    Configuration(String),
    /// Coordinates outside the grid extent.
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },
    /// A liquid amount that is NaN or infinite.
    InvalidAmount(f32),
    /// A cell type id that does not map to a `CellType`.
    UnknownCellType(u8),
}

impl LiquidError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        LiquidError::Configuration(msg.into())
    }
}

impl fmt::Display for LiquidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiquidError::Configuration(msg) => write!(f, "configuration error: {}", msg),
            LiquidError::OutOfBounds { x, y, width, height } => write!(
                f,
                "cell ({}, {}) is out of bounds for {}x{} grid",
                x, y, width, height
            ),
            LiquidError::InvalidAmount(amount) => {
                write!(f, "invalid liquid amount: {}", amount)
            }
            LiquidError::UnknownCellType(id) => write!(f, "unknown cell type id: {}", id),
        }
    }
}

impl std::error::Error for LiquidError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_coordinates_and_extent() {
        let err = LiquidError::OutOfBounds { x: 7, y: 2, width: 4, height: 3 };
        assert_eq!(err.to_string(), "cell (7, 2) is out of bounds for 4x3 grid");
    }

    #[test]
    fn configuration_message_is_prefixed() {
        let err = LiquidError::config("width must be > 0");
        assert_eq!(err.to_string(), "configuration error: width must be > 0");
    }
}
