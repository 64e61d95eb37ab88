//! Read contract used by renderers: liquid, type, settle state, flow mask.

use super::super::*;

impl Grid {
    pub fn liquid_at(&self, x: u32, y: u32) -> Result<f32, LiquidError> {
        let idx = self.checked_index(x, y)?;
        Ok(self.cells[idx].liquid())
    }

    pub fn type_at(&self, x: u32, y: u32) -> Result<CellType, LiquidError> {
        let idx = self.checked_index(x, y)?;
        Ok(self.cells[idx].cell_type())
    }

    pub fn settled_at(&self, x: u32, y: u32) -> Result<bool, LiquidError> {
        let idx = self.checked_index(x, y)?;
        Ok(self.cells[idx].settled())
    }

    /// Top=1, Right=2, Bottom=4, Left=8
    pub fn flow_bitmask_at(&self, x: u32, y: u32) -> Result<u8, LiquidError> {
        let idx = self.checked_index(x, y)?;
        Ok(self.cells[idx].flow_bitmask())
    }

    // === Aggregates ===

    pub fn total_liquid(&self) -> f64 {
        self.cells.iter().map(|c| c.liquid() as f64).sum()
    }

    pub fn settled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.settled()).count()
    }

    pub fn wet_count(&self) -> usize {
        self.cells.iter().filter(|c| c.liquid() > 0.0).count()
    }

    /// True when every cell holding liquid is settled
    pub fn is_quiescent(&self) -> bool {
        self.cells.iter().all(|c| c.liquid() == 0.0 || c.settled())
    }
}
