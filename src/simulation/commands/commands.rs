use super::ParticleSystem;

/// Return every active particle to the pool and restart the frame counter.
/// The RNG keeps its state; use `reseed` for a reproducible restart.
pub(super) fn clear(system: &mut ParticleSystem) {
    let cleared = system.active.len();
    for id in system.active.drain(..) {
        system.particles[id as usize].deactivate();
        system.pool.push(id);
    }
    system.grid.clear();
    system.render.len = 0;
    system.frame = 0;

    crate::log!("Tidepool: cleared {} particles", cleared);
}
