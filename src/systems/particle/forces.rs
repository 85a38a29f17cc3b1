use crate::core::Vec2;
use crate::domain::constants::{
    FLOOR_LIFT, FLOOR_LIFT_BAND, FOAM_JITTER, REPEL_SOFTENING, REPEL_STRENGTH,
};

use super::{Particle, ParticleState, UpdateContext};

/// Signed horizontal push away from the pointer, before foam jitter.
///
/// Magnitude falls off as `200 / (d + 10)` with the true distance `d`, but the
/// push only ever acts along x: positive when the particle is right of the
/// pointer, negative otherwise (including directly above or below it).
#[inline]
pub fn horizontal_repulsion(position: Vec2, pointer: Vec2) -> f32 {
    let strength = REPEL_STRENGTH / (position.distance(pointer) + REPEL_SOFTENING);
    if position.x > pointer.x { strength } else { -strength }
}

/// Accumulate this step's forces into `acceleration`.
pub(super) fn apply_forces(particle: &mut Particle, ctx: &mut UpdateContext) {
    // Gravity is checked before the day wake-up below
    if !particle.is_resting() {
        particle.acceleration.y += ctx.config.gravity;
    }

    if !ctx.step.is_day() {
        return;
    }

    if particle.state == ParticleState::Resting {
        particle.state = ParticleState::Falling;
    }

    let push = horizontal_repulsion(particle.position, ctx.step.pointer)
        + ctx.rng.range(-FOAM_JITTER, FOAM_JITTER);
    particle.acceleration.x += push;

    if particle.position.y > ctx.config.height - FLOOR_LIFT_BAND {
        particle.acceleration.y -= FLOOR_LIFT;
    }
}
