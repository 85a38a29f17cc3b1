use crate::domain::constants::{SPAWN_ATTEMPTS, TIDE_MAX, TIDE_MIN};
use crate::domain::{SimConfig, StepContext};

use super::ParticleSystem;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct SpawnOutcome {
    pub(super) spawned: u32,
    pub(super) failed: u32,
}

/// Linear in the pointer height: `TIDE_MAX` at the top edge, `TIDE_MIN` at
/// the bottom. Not clamped, so a pointer above the viewport raises the tide
/// further and one below it can drive the spawn count to zero.
pub(super) fn tide_intensity(pointer_y: f32, height: f32) -> f32 {
    TIDE_MAX + (pointer_y / height) * (TIDE_MIN - TIDE_MAX)
}

/// Spawn calls for one night step: `ceil(spawnRateBase * tide)`, at most one
/// call per pool slot.
pub(super) fn spawn_budget(config: &SimConfig, pointer_y: f32) -> u32 {
    let count = config.spawn_rate_base * tide_intensity(pointer_y, config.height);
    if !(count > 0.0) {
        return 0;
    }
    (count.ceil() as u32).min(config.max_particles)
}

pub(super) fn handle_spawning(system: &mut ParticleSystem, ctx: &StepContext) -> SpawnOutcome {
    let mut outcome = SpawnOutcome::default();
    if ctx.is_day() {
        return outcome;
    }
    if system.active.len() >= system.config.max_particles as usize {
        return outcome;
    }

    for _ in 0..spawn_budget(&system.config, ctx.pointer.y) {
        if spawn_particle(system) {
            outcome.spawned += 1;
        } else {
            outcome.failed += 1;
        }
    }
    outcome
}

/// Pick random columns and drop a particle either into an empty bottom cell
/// or just above the column's pile surface. The grid is not updated here, so
/// spawns within one step can share a cell.
pub(super) fn spawn_particle(system: &mut ParticleSystem) -> bool {
    if system.pool.is_empty() {
        return false;
    }
    let cols = system.grid.cols();
    let rows = system.grid.rows() as i32;
    if cols == 0 || rows == 0 {
        return false;
    }

    for _ in 0..SPAWN_ATTEMPTS {
        let col = system.rng.below(cols) as i32;
        let mut row = rows - 1;

        if system.grid.is_empty(col, row) {
            return activate_particle(system, col as u32, row as u32);
        }

        // Climb to the surface of the pile; row 0 is never a spawn target
        while row > 0 && !system.grid.is_empty(col, row) {
            row -= 1;
        }
        if row > 0 && system.grid.is_empty(col, row) {
            return activate_particle(system, col as u32, row as u32);
        }
    }
    false
}

pub(super) fn activate_particle(system: &mut ParticleSystem, col: u32, row: u32) -> bool {
    let Some(id) = system.pool.pop() else {
        return false;
    };
    let center = system.grid.cell_center(col, row);
    system.particles[id as usize].spawn(center.x, center.y, &mut system.rng);
    system.active.push(id);
    true
}
