use crate::core::Rng;

use super::perf_stats::PerfStats;
use super::ParticleSystem;

pub(super) fn enable_perf_metrics(system: &mut ParticleSystem, enabled: bool) {
    system.perf_enabled = enabled;
    if !enabled {
        system.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(system: &ParticleSystem) -> PerfStats {
    system.perf_stats.clone()
}

pub(super) fn reseed(system: &mut ParticleSystem, seed: u32) {
    system.rng = Rng::new(seed);
}
