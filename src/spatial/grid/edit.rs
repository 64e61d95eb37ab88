//! Mutation entry points for editors and input handlers

use super::*;
use crate::domain::cell::FlowDirection;

impl Grid {
    /// Retype a cell. Solid cells lose their liquid.
    ///
    /// Only the four neighbours are unsettled, not the retyped cell.
    pub fn set_type(&mut self, x: u32, y: u32, cell_type: CellType) -> Result<(), LiquidError> {
        let idx = self.checked_index(x, y)?;
        let cell = &mut self.cells[idx];
        cell.cell_type = cell_type;
        if cell_type == CellType::Solid {
            cell.liquid = 0.0;
        }
        self.unsettle_neighbors(x, y);
        Ok(())
    }

    /// Add (or with a negative amount, remove) liquid and unsettle the cell.
    ///
    /// The result never drops below zero, and Solid cells keep zero liquid.
    pub fn add_liquid(&mut self, x: u32, y: u32, amount: f32) -> Result<(), LiquidError> {
        if !amount.is_finite() {
            return Err(LiquidError::InvalidAmount(amount));
        }
        let idx = self.checked_index(x, y)?;
        let cell = &mut self.cells[idx];
        if !cell.is_solid() {
            cell.liquid = (cell.liquid + amount).max(0.0);
        }
        cell.unsettle();
        Ok(())
    }

    /// Drain every cell and put the whole grid back into the sweep
    pub fn clear_liquid(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.liquid = 0.0;
            cell.reset_flow_directions();
            cell.unsettle();
        }
    }

    pub(crate) fn unsettle_neighbors(&mut self, x: u32, y: u32) {
        for dir in FlowDirection::ALL {
            if let Some(n) = self.neighbor_index(x, y, dir) {
                self.cells[n].unsettle();
            }
        }
    }
}
