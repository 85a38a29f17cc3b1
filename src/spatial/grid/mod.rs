//! CellGrid - uniform occupancy grid over the viewport
//!
//! One slot per cell, each holding at most one particle id. The grid is
//! rebuilt from scratch at the start of every step and then only read, so
//! during a step it describes where particles were when the step began.
//!
//! Known race: when two particles map to the same cell, the one registered
//! later overwrites the earlier one. The grid is an approximate occupancy
//! map for stacking, not a collision manifold, and stacking behaviour depends
//! on that order.

use crate::core::Vec2;
use crate::systems::particle::ParticleId;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

mod indexing;
mod accessors;

pub struct CellGrid {
    cols: u32,
    rows: u32,
    cell_size: f32,

    /// Row-major, `rows * cols` entries
    cells: Vec<Option<ParticleId>>,
}

impl CellGrid {
    /// Grid covering `width x height`; partial cells at the right and bottom
    /// edges count as whole cells.
    pub fn new(width: f32, height: f32, cell_size: f32) -> Self {
        let cols = (width / cell_size).ceil().max(0.0) as u32;
        let rows = (height / cell_size).ceil().max(0.0) as u32;
        Self {
            cols,
            rows,
            cell_size,
            cells: vec![None; (cols as usize) * (rows as usize)],
        }
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.cells.par_iter_mut().for_each(|c| *c = None);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.cells.fill(None);
        }
    }

    /// Clear, then register each particle at the cell under its position.
    ///
    /// Positions outside the grid are skipped. Registration is sequential
    /// and last-write-wins. Returns how many particles were registered.
    pub fn rebuild<I>(&mut self, particles: I) -> u32
    where
        I: IntoIterator<Item = (ParticleId, Vec2)>,
    {
        self.clear();
        let mut registered = 0u32;
        for (id, pos) in particles {
            let (col, row) = self.cell_coords(pos);
            if self.set(col, row, id) {
                registered += 1;
            }
        }
        registered
    }
}
