use crate::domain::StepContext;

use super::{grid_map, particles, spawning};
use super::{ParticleSystem, PerfTimer};

pub(super) fn step(system: &mut ParticleSystem, ctx: &StepContext) {
    let perf_on = system.perf_enabled;
    if !perf_on {
        grid_map::update_grid_map(system);
        spawning::handle_spawning(system, ctx);
        particles::update_particles(system, ctx);
        system.frame += 1;
        return;
    }

    system.perf_stats.reset();
    let step_start = PerfTimer::start();
    let mut lap = PerfTimer::start();

    // The grid snapshot must be taken before anything moves this step
    let registered = grid_map::update_grid_map(system);
    system.perf_stats.grid_ms = lap.lap_ms();

    let spawn = spawning::handle_spawning(system, ctx);
    system.perf_stats.spawn_ms = lap.lap_ms();

    let despawned = particles::update_particles(system, ctx);
    system.perf_stats.particles_ms = lap.lap_ms();

    let counts = system.state_counts();
    let stats = &mut system.perf_stats;
    stats.grid_registered = registered;
    stats.spawned = spawn.spawned;
    stats.spawn_failures = spawn.failed;
    stats.despawned = despawned;
    stats.active_count = system.active.len() as u32;
    stats.pool_count = system.pool.len() as u32;
    stats.resting_count = counts.resting;
    stats.sliding_count = counts.sliding;
    stats.frame = system.frame;
    stats.step_ms = step_start.elapsed_ms();

    system.frame += 1;
}
