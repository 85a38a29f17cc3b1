use super::*;

impl CellGrid {
    /// Particle registered at `(col, row)`; `None` for empty or out-of-range cells.
    #[inline]
    pub fn get(&self, col: i32, row: i32) -> Option<ParticleId> {
        if !self.in_bounds(col, row) {
            return None;
        }
        let idx = self.index(col as u32, row as u32);
        *fast!(self.cells, [idx])
    }

    /// Out-of-range cells count as empty.
    #[inline]
    pub fn is_empty(&self, col: i32, row: i32) -> bool {
        self.get(col, row).is_none()
    }

    /// Write `id` into a cell, overwriting any previous occupant.
    /// Returns false (and writes nothing) when the cell is out of range.
    #[inline]
    pub fn set(&mut self, col: i32, row: i32, id: ParticleId) -> bool {
        if !self.in_bounds(col, row) {
            return false;
        }
        let idx = self.index(col as u32, row as u32);
        fast!(self.cells, [idx] = Some(id));
        true
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
