use wasm_bindgen::prelude::*;

use crate::domain::{Mode, StepContext};

use super::perf_stats::PerfStats;
use super::ParticleSystem;

/// JS-facing handle. The driver calls `step` once per frame with the pointer
/// and the day flag, then reads positions through `extract_positions` +
/// `positions_ptr` straight out of wasm memory.
#[wasm_bindgen]
pub struct TideWorld {
    core: ParticleSystem,
}

#[wasm_bindgen]
impl TideWorld {
    /// Create a world with default tuning over the given viewport
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: ParticleSystem::new(width, height),
        }
    }

    /// Create a world from a camelCase JSON config (missing fields use defaults)
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<TideWorld, JsValue> {
        let core = ParticleSystem::from_config_json(json).map_err(|e| {
            crate::log_warn!("Tidepool: rejected config: {}", e);
            JsValue::from_str(&e)
        })?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.config().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.config().height }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.active_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn pool_size(&self) -> u32 { self.core.pool_len() as u32 }

    #[wasm_bindgen(getter)]
    pub fn capacity(&self) -> u32 { self.core.capacity() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn particle_radius(&self) -> f32 { self.core.config().particle_radius }

    #[wasm_bindgen(getter)]
    pub fn resting_count(&self) -> u32 { self.core.state_counts().resting }

    pub fn get_config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Step the simulation forward one frame
    pub fn step(&mut self, pointer_x: f32, pointer_y: f32, is_day: bool) {
        let ctx = StepContext::new(pointer_x, pointer_y, Mode::from_is_day(is_day));
        self.core.update(&ctx);
    }

    /// Return every particle to the pool
    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn reseed(&mut self, seed: u32) {
        self.core.reseed(seed);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Write `[x, y]` pairs for every active particle; returns the particle count
    pub fn extract_positions(&mut self) -> usize {
        self.core.extract_positions()
    }

    /// Pointer to the position buffer (for JS rendering)
    pub fn positions_ptr(&self) -> *const f32 {
        self.core.positions_ptr()
    }

    /// Floats written by the last `extract_positions`
    pub fn positions_len(&self) -> usize {
        self.core.positions_len()
    }
}

impl TideWorld {
    pub fn core(&self) -> &ParticleSystem {
        &self.core
    }
}
