//! SimConfig - scale and capacity settings for a particle system
//!
//! Loaded from a camelCase JSON object; every field is optional and falls
//! back to the defaults below:
//!
//! ```json
//! {
//!   "maxParticles": 2500,
//!   "particleRadius": 6,
//!   "gravity": 0.4,
//!   "terminalVelocity": 12,
//!   "spawnRateBase": 2,
//!   "width": 800,
//!   "height": 600,
//!   "seed": 12345
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::constants::{MAX_GRID_CELLS, MAX_PARTICLES, MAX_VIEWPORT_EXTENT};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    /// Pool size and hard cap on active particles.
    pub max_particles: u32,
    pub particle_radius: f32,
    /// Downward acceleration added per step.
    pub gravity: f32,
    pub terminal_velocity: f32,
    /// Spawn calls per step at tide intensity 1.
    pub spawn_rate_base: f32,
    pub width: f32,
    pub height: f32,
    pub seed: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_particles: 2500,
            particle_radius: 6.0,
            gravity: 0.4,
            terminal_velocity: 12.0,
            spawn_rate_base: 2.0,
            width: 800.0,
            height: 600.0,
            seed: 12345,
        }
    }
}

impl SimConfig {
    /// Defaults with a different viewport.
    pub fn with_viewport(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Defaults over a viewport clamped into the supported range. NaN sides
    /// fall back to 1.
    pub fn with_clamped_viewport(width: f32, height: f32) -> Self {
        let side = |v: f32| if v.is_nan() { 1.0 } else { v.clamp(1.0, MAX_VIEWPORT_EXTENT) };
        Self::with_viewport(side(width), side(height))
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.particle_radius * 2.0
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_particles == 0 {
            return Err("maxParticles must be at least 1".to_string());
        }
        if self.max_particles > MAX_PARTICLES {
            return Err(format!(
                "maxParticles must be at most {}, got {}",
                MAX_PARTICLES, self.max_particles
            ));
        }
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("particleRadius", self.particle_radius),
            ("terminalVelocity", self.terminal_velocity),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }
        for (name, value) in [("gravity", self.gravity), ("spawnRateBase", self.spawn_rate_base)] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be a non-negative number, got {}", name, value));
            }
        }
        self.grid_cells()
            .filter(|&cells| cells <= MAX_GRID_CELLS)
            .ok_or_else(|| {
                format!(
                    "{}x{} viewport with particleRadius {} needs more than {} grid cells",
                    self.width, self.height, self.particle_radius, MAX_GRID_CELLS
                )
            })?;
        Ok(())
    }

    /// `ceil(width / cellSize) * ceil(height / cellSize)`, or `None` on overflow.
    fn grid_cells(&self) -> Option<usize> {
        let cell = f64::from(self.cell_size());
        let side = |extent: f32| {
            let n = (f64::from(extent) / cell).ceil();
            (n.is_finite() && n <= f64::from(u32::MAX)).then_some(n as usize)
        };
        side(self.width)?.checked_mul(side(self.height)?)
    }
}
