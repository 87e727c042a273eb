use super::perf_stats::PerfStats;
use super::random::sanitize_seed;
use super::SimulationCore;

pub(super) fn set_frame_cap(core: &mut SimulationCore, cap: u32) {
    core.frame_cap = cap;
}

pub(super) fn set_debug_logging(core: &mut SimulationCore, enabled: bool) {
    core.debug_logging = enabled;
}

pub(super) fn set_seed(core: &mut SimulationCore, seed: u32) {
    core.rng_state = sanitize_seed(seed);
}

pub(super) fn enable_perf_metrics(core: &mut SimulationCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &SimulationCore) -> PerfStats {
    core.perf_stats.clone()
}
