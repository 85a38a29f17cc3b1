use crate::core::Rng;
use crate::domain::constants::{SLIDE_SPEED, WALL_RESTITUTION};
use crate::spatial::CellGrid;

use super::{Particle, ParticleId, ParticleState, UpdateContext};

/// Boundary and pile resolution, run after integration every step.
pub(super) fn handle_collisions(particle: &mut Particle, id: ParticleId, ctx: &mut UpdateContext) {
    let config = ctx.config;
    let grid = ctx.grid;
    let is_day = ctx.step.is_day();

    // Cell of the integrated position, before any correction below
    let (col, row) = grid.cell_coords(particle.position);

    // Floor
    if particle.position.y + config.particle_radius >= config.height {
        particle.position.y = config.height - config.particle_radius;
        particle.velocity.y = 0.0;
        particle.state = ParticleState::Resting;
    }

    // Walls; a NaN x counts as outside
    if !(particle.position.x >= 0.0 && particle.position.x <= config.width) {
        if is_day {
            particle.state = ParticleState::Inactive;
        } else if particle.position.x.is_nan() {
            particle.velocity.x = 0.0;
            particle.position.x = 0.0;
        } else {
            particle.velocity.x *= WALL_RESTITUTION;
            particle.position.x = particle.position.x.clamp(0.0, config.width);
        }
    }

    // Piles only form at night, and only under particles still in motion
    if is_day || particle.is_resting() {
        return;
    }

    let below_row = row.saturating_add(1);
    if below_row >= grid.rows() as i32 || col < 0 || col >= grid.cols() as i32 {
        return;
    }
    match grid.get(col, below_row) {
        Some(below) if below != id => {}
        _ => return,
    }

    let cell = grid.cell_size();
    particle.position.y = below_row as f32 * cell - cell;
    particle.velocity.y = 0.0;
    particle.state = ParticleState::Resting;

    if let Some(dir) = slide_direction(grid, col, row, ctx.rng) {
        particle.state = ParticleState::Sliding;
        particle.velocity.x = dir * SLIDE_SPEED;
    }
}

/// Slide rule for a particle resting at `(col, row)` on top of `(col, row + 1)`.
///
/// A side is open when both the cell beside the particle and the cell
/// diagonally below it on that side are empty, and the side is inside the
/// grid. Returns `-1.0` (left), `1.0` (right), or `None` when boxed in; a coin
/// flip breaks the tie when both sides are open.
pub fn slide_direction(grid: &CellGrid, col: i32, row: i32, rng: &mut Rng) -> Option<f32> {
    let below_row = row.saturating_add(1);
    let open = |c: i32| grid.is_empty(c, below_row) && grid.is_empty(c, row);

    let left = col > 0 && open(col - 1);
    let right = col < grid.cols() as i32 - 1 && open(col + 1);

    match (left, right) {
        (true, true) => Some(if rng.coin() { -1.0 } else { 1.0 }),
        (true, false) => Some(-1.0),
        (false, true) => Some(1.0),
        (false, false) => None,
    }
}
