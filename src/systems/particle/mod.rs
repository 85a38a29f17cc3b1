//! Particle - one pooled body in the tide
//!
//! A particle is a point with a radius that integrates under gravity, gets
//! swept by the pointer in day mode, and stacks into piles in night mode.
//!
//! State machine:
//! - `Inactive` → `Falling`: `spawn`
//! - `Falling`/`Sliding` → `Resting`: floor contact or landing on a pile
//! - `Resting` → `Sliding`: the slide rule finds an open diagonal
//! - `Resting` → `Falling`: day mode wakes every particle
//! - any → `Inactive`: wall exit in day mode, or fell past the floor margin

use crate::core::{Rng, Vec2};
use crate::domain::constants::{DEAD_MARGIN, SPAWN_JITTER};
use crate::domain::{SimConfig, StepContext};
use crate::spatial::CellGrid;

mod collision;
mod forces;

pub use collision::slide_direction;
pub use forces::horizontal_repulsion;

/// Slot index into the particle arena
pub type ParticleId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ParticleState {
    /// In the pool; not simulated or rendered
    #[default]
    Inactive,
    /// Integrating freely
    Falling,
    /// Part of a pile or on the floor; skipped by integration
    Resting,
    /// Pushed sideways off a pile; integrating
    Sliding,
}

/// Everything a particle reads while it updates
pub struct UpdateContext<'a> {
    pub grid: &'a CellGrid,
    pub config: &'a SimConfig,
    pub step: &'a StepContext,
    pub rng: &'a mut Rng,
}

#[derive(Clone, Debug, Default)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Force accumulator; zeroed at the end of every update
    pub acceleration: Vec2,
    state: ParticleState,
}

impl Particle {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> ParticleState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state != ParticleState::Inactive
    }

    #[inline]
    pub fn is_resting(&self) -> bool {
        self.state == ParticleState::Resting
    }

    /// Reinitialize a pooled particle at `(x, y)` with a small sideways jitter.
    pub fn spawn(&mut self, x: f32, y: f32, rng: &mut Rng) {
        self.position.set(x, y);
        self.velocity.set(rng.range(-SPAWN_JITTER, SPAWN_JITTER), 0.0);
        self.acceleration = Vec2::zero();
        self.state = ParticleState::Falling;
    }

    pub fn deactivate(&mut self) {
        self.state = ParticleState::Inactive;
    }

    /// One step: accumulate forces, integrate unless resting, resolve contacts.
    pub fn update(&mut self, id: ParticleId, ctx: &mut UpdateContext) {
        if !self.is_active() {
            return;
        }

        forces::apply_forces(self, ctx);

        if !self.is_resting() {
            self.velocity += self.acceleration;
            self.velocity = self.velocity.limit(ctx.config.terminal_velocity);
            self.position += self.velocity;
        }
        self.acceleration = Vec2::zero();

        collision::handle_collisions(self, id, ctx);
    }

    /// Inactive, or fell more than `DEAD_MARGIN` below the viewport.
    #[inline]
    pub fn is_dead(&self, height: f32) -> bool {
        !self.is_active() || self.position.y > height + DEAD_MARGIN
    }
}

#[cfg(test)]
mod tests;
