use crate::core::Rng;
use crate::domain::SimConfig;
use crate::spatial::CellGrid;
use crate::systems::particle::{Particle, ParticleId};

use super::perf_stats::PerfStats;
use super::{ParticleSystem, RenderBuffers};

/// The one allocation point: grid, arena, free-list, active list and render
/// buffer are all sized here and never grow.
pub(super) fn create_particle_system(config: SimConfig) -> ParticleSystem {
    let capacity = config.max_particles as usize;
    let grid = CellGrid::new(config.width, config.height, config.cell_size());

    crate::log!(
        "Tidepool: {}x{} grid ({} px cells), pool of {} particles",
        grid.cols(),
        grid.rows(),
        grid.cell_size(),
        capacity
    );

    ParticleSystem {
        rng: Rng::new(config.seed),
        grid,
        particles: vec![Particle::new(); capacity],
        pool: (0..capacity as ParticleId).collect(),
        active: Vec::with_capacity(capacity),
        frame: 0,
        render: RenderBuffers {
            positions: vec![0.0; capacity * 2],
            len: 0,
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    }
}
