//! ParticleSystem - pooled particles on a rebuilt-every-step occupancy grid
//!
//! Per step, strictly in this order:
//! 1. rebuild the grid from current positions
//! 2. spawn into open cells (night only)
//! 3. update every active particle in reverse order, recycling the dead
//!
//! Particles live in a fixed arena sized to `max_particles` at creation; a
//! free-list (`pool`) and an insertion-ordered `active` list index into it.
//! Nothing is allocated after construction.

use crate::core::{Rng, Vec2};
use crate::domain::{SimConfig, StepContext};
use crate::spatial::CellGrid;
use crate::systems::particle::{Particle, ParticleId, ParticleState};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "step/grid_map.rs"]
mod grid_map;
#[path = "step/spawning.rs"]
mod spawning;
#[path = "step/particles.rs"]
mod particles;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::TideWorld;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Flat `[x0, y0, x1, y1, ...]` snapshot handed to the renderer
pub(crate) struct RenderBuffers {
    positions: Vec<f32>,
    len: usize,
}

/// Census of active particles by state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StateCounts {
    pub falling: u32,
    pub resting: u32,
    pub sliding: u32,
}

pub struct ParticleSystem {
    config: SimConfig,
    grid: CellGrid,

    // Arena + free-list
    particles: Vec<Particle>,
    pool: Vec<ParticleId>,
    active: Vec<ParticleId>,

    rng: Rng,
    frame: u64,
    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl ParticleSystem {
    /// Default tuning over a `width x height` viewport, clamped into the
    /// supported range.
    pub fn new(width: f32, height: f32) -> Self {
        init::create_particle_system(SimConfig::with_clamped_viewport(width, height))
    }

    pub fn from_config(config: SimConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(init::create_particle_system(config))
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        Self::from_config(SimConfig::from_json(json)?)
    }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn grid(&self) -> &CellGrid { &self.grid }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn capacity(&self) -> usize { self.particles.len() }

    pub fn active_count(&self) -> usize { self.active.len() }

    pub fn pool_len(&self) -> usize { self.pool.len() }

    /// Active ids in insertion order
    pub fn active_ids(&self) -> &[ParticleId] { &self.active }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id as usize)
    }

    /// Active particles in insertion order
    pub fn active_particles(&self) -> impl Iterator<Item = (ParticleId, &Particle)> + '_ {
        self.active.iter().map(move |&id| (id, &self.particles[id as usize]))
    }

    /// Render snapshot: one position per active particle
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.active_particles().map(|(_, p)| p.position)
    }

    pub fn state_counts(&self) -> StateCounts {
        let mut counts = StateCounts::default();
        for (_, p) in self.active_particles() {
            match p.state() {
                ParticleState::Falling => counts.falling += 1,
                ParticleState::Resting => counts.resting += 1,
                ParticleState::Sliding => counts.sliding += 1,
                ParticleState::Inactive => {}
            }
        }
        counts
    }

    /// Advance one step with this frame's pointer and mode.
    pub fn update(&mut self, ctx: &StepContext) {
        step::step(self, ctx);
    }

    /// One spawn attempt (up to 10 column picks). Returns whether a particle
    /// was activated.
    pub fn spawn_particle(&mut self) -> bool {
        spawning::spawn_particle(self)
    }

    /// Take a particle from the pool and place it at the center of a cell.
    /// Returns false when the pool is empty.
    pub fn activate_particle(&mut self, col: u32, row: u32) -> bool {
        spawning::activate_particle(self, col, row)
    }

    /// Return every active particle to the pool
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    pub fn reseed(&mut self, seed: u32) {
        settings::reseed(self, seed);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Fill the render buffer from the active list; returns the particle count.
    pub fn extract_positions(&mut self) -> usize {
        render_extract::extract_positions(self)
    }

    /// Pointer to the render buffer (for JS rendering)
    pub fn positions_ptr(&self) -> *const f32 {
        self.render.positions.as_ptr()
    }

    /// Number of floats written by the last `extract_positions`
    pub fn positions_len(&self) -> usize {
        self.render.len
    }

    pub fn positions_slice(&self) -> &[f32] {
        &self.render.positions[..self.render.len]
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
