use super::*;

impl CellGrid {
    // === Dimensions ===
    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn cell_size(&self) -> f32 { self.cell_size }

    #[inline]
    pub fn size(&self) -> usize { self.cells.len() }

    // === Coordinate conversion ===

    /// Cell containing `pos`. May be out of bounds (negative or past the edge).
    #[inline]
    pub fn cell_coords(&self, pos: Vec2) -> (i32, i32) {
        (
            (pos.x / self.cell_size).floor() as i32,
            (pos.y / self.cell_size).floor() as i32,
        )
    }

    /// Center of a cell in world units
    #[inline]
    pub fn cell_center(&self, col: u32, row: u32) -> Vec2 {
        let half = self.cell_size / 2.0;
        Vec2::new(
            col as f32 * self.cell_size + half,
            row as f32 * self.cell_size + half,
        )
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < self.cols as i32 && row >= 0 && row < self.rows as i32
    }

    #[inline(always)]
    pub(super) fn index(&self, col: u32, row: u32) -> usize {
        debug_assert!(
            col < self.cols && row < self.rows,
            "index: out of bounds ({}, {}) for {}x{} grid",
            col,
            row,
            self.cols,
            self.rows
        );
        (row as usize) * (self.cols as usize) + col as usize
    }
}
