#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::ParticleSystem;

/// Copy active positions into the flat render buffer, in active-list order.
/// Returns the number of particles written (buffer holds twice that many floats).
pub(super) fn extract_positions(system: &mut ParticleSystem) -> usize {
    let count = system.active.len();
    let particles = &system.particles;
    let ids = &system.active;
    let out = &mut system.render.positions[..count * 2];

    #[cfg(feature = "parallel")]
    {
        out.par_chunks_mut(2).zip(ids.par_iter()).for_each(|(xy, &id)| {
            let pos = particles[id as usize].position;
            xy[0] = pos.x;
            xy[1] = pos.y;
        });
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (xy, &id) in out.chunks_mut(2).zip(ids.iter()) {
            let pos = particles[id as usize].position;
            xy[0] = pos.x;
            xy[1] = pos.y;
        }
    }

    system.render.len = count * 2;
    count
}
