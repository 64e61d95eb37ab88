use super::super::*;

impl Grid {
    /// Cell at `(x, y)`, `None` when out of bounds
    #[inline]
    pub fn cell(&self, x: u32, y: u32) -> Option<&Cell> {
        self.checked_index(x, y).ok().map(|idx| &self.cells[idx])
    }

    /// All cells, row-major
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cell_idx(&self, idx: usize) -> &Cell {
        fast!(self.cells, [idx])
    }

    #[inline]
    pub(crate) fn cell_idx_mut(&mut self, idx: usize) -> &mut Cell {
        #[cfg(debug_assertions)]
        {
            &mut self.cells[idx]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { self.cells.get_unchecked_mut(idx) }
        }
    }
}
