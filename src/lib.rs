//! Tidepool Engine - tide and pile particle simulation in WASM
//!
//! Particles fall onto a floor and stack into piles on a uniform grid. At
//! night the tide spawns new particles and piles erode sideways; during the
//! day the pointer sweeps particles off screen.
//!
//! Layout:
//! - core/       - math, randomness, macros
//! - domain/     - configuration and per-step inputs
//! - spatial/    - occupancy grid
//! - systems/    - particle physics and stacking
//! - simulation/ - pooled particle system and the JS facade

// Macros must be declared first so later modules can use them
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Thread pool init for the `parallel` feature in the browser
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    log!("🌊 Tidepool engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{Rng, Vec2};
pub use crate::domain::{Mode, SimConfig, StepContext};
pub use crate::simulation::{ParticleSystem, PerfStats, StateCounts, TideWorld};
pub use crate::spatial::CellGrid;
pub use crate::systems::particle::{Particle, ParticleId, ParticleState};
