use super::ParticleSystem;

/// Rebuild the occupancy grid from the active list, in insertion order.
/// Returns how many particles landed inside the grid.
pub(super) fn update_grid_map(system: &mut ParticleSystem) -> u32 {
    let particles = &system.particles;
    system
        .grid
        .rebuild(system.active.iter().map(|&id| (id, particles[id as usize].position)))
}
