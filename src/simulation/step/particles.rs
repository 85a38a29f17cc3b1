use crate::domain::StepContext;
use crate::systems::particle::UpdateContext;

use super::ParticleSystem;

/// Update every active particle, newest first, and recycle the dead.
///
/// Must stay sequential and newest-first: pile shapes depend on this order.
/// Returns the number of particles returned to the pool.
pub(super) fn update_particles(system: &mut ParticleSystem, ctx: &StepContext) -> u32 {
    let height = system.config.height;
    let mut update_ctx = UpdateContext {
        grid: &system.grid,
        config: &system.config,
        step: ctx,
        rng: &mut system.rng,
    };

    let mut despawned = 0u32;
    for i in (0..system.active.len()).rev() {
        let id = system.active[i];
        let particle = &mut system.particles[id as usize];
        particle.update(id, &mut update_ctx);

        if particle.is_dead(height) {
            particle.deactivate();
            system.active.remove(i);
            system.pool.push(id);
            despawned += 1;
        }
    }
    despawned
}
