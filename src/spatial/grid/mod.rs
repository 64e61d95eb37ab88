//! Grid - flat arena of cells addressed by (x, y)
//!
//! Cells are stored row-major (`y * width + x`). Neighbours are never stored;
//! they are resolved by bounds-checked coordinate arithmetic, so there is no
//! cyclic cell graph to keep consistent.

use crate::core::error::LiquidError;
use crate::domain::cell::{Cell, CellType};

mod indexing;
mod accessors;
mod edit;

pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    pub(crate) cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of Empty cells
    pub fn new(width: u32, height: u32) -> Result<Self, LiquidError> {
        let size = Self::checked_size(width, height)?;
        Ok(Self::build(width, height, size, |_| CellType::Empty))
    }

    /// Create a grid with an initial type per cell (row-major)
    pub fn with_types(width: u32, height: u32, types: &[CellType]) -> Result<Self, LiquidError> {
        let size = Self::checked_size(width, height)?;
        if types.len() != size {
            return Err(LiquidError::config(format!(
                "expected {} initial cell types for {}x{} grid, got {}",
                size,
                width,
                height,
                types.len()
            )));
        }
        Ok(Self::build(width, height, size, |idx| types[idx]))
    }

    fn checked_size(width: u32, height: u32) -> Result<usize, LiquidError> {
        if width == 0 || height == 0 {
            return Err(LiquidError::config(format!(
                "grid dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        width
            .checked_mul(height)
            .map(|n| n as usize)
            .ok_or_else(|| LiquidError::config(format!("grid {}x{} is too large", width, height)))
    }

    fn build(width: u32, height: u32, size: usize, type_of: impl Fn(usize) -> CellType) -> Self {
        let cells = (0..size)
            .map(|idx| {
                let x = (idx as u32) % width;
                let y = (idx as u32) / width;
                Cell::new(x, y, type_of(idx))
            })
            .collect();

        Self { width, height, size, cells }
    }
}
