use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Per-step timings and counters, filled only while perf metrics are on
#[wasm_bindgen]
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) grid_ms: f64,
    pub(super) spawn_ms: f64,
    pub(super) particles_ms: f64,
    pub(super) grid_registered: u32,
    pub(super) spawned: u32,
    pub(super) spawn_failures: u32,
    pub(super) despawned: u32,
    pub(super) active_count: u32,
    pub(super) pool_count: u32,
    pub(super) resting_count: u32,
    pub(super) sliding_count: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn grid_ms(&self) -> f64 { self.grid_ms }
    #[wasm_bindgen(getter)]
    pub fn spawn_ms(&self) -> f64 { self.spawn_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_ms(&self) -> f64 { self.particles_ms }
    #[wasm_bindgen(getter)]
    pub fn grid_registered(&self) -> u32 { self.grid_registered }
    #[wasm_bindgen(getter)]
    pub fn spawned(&self) -> u32 { self.spawned }
    #[wasm_bindgen(getter)]
    pub fn spawn_failures(&self) -> u32 { self.spawn_failures }
    #[wasm_bindgen(getter)]
    pub fn despawned(&self) -> u32 { self.despawned }
    #[wasm_bindgen(getter)]
    pub fn active_count(&self) -> u32 { self.active_count }
    #[wasm_bindgen(getter)]
    pub fn pool_count(&self) -> u32 { self.pool_count }
    #[wasm_bindgen(getter)]
    pub fn resting_count(&self) -> u32 { self.resting_count }
    #[wasm_bindgen(getter)]
    pub fn sliding_count(&self) -> u32 { self.sliding_count }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
