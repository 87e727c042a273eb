use crate::core::error::DiceError;
use crate::dice_body_system::{DiceBodySystem, StepEvents};
use crate::domain::SceneConfig;

use super::perf_stats::PerfStats;
use super::random::sanitize_seed;
use super::render_extract::POSE_LEN;
use super::SimulationCore;

pub(super) fn create_simulation_core(config: SceneConfig) -> Result<SimulationCore, DiceError> {
    config.validate()?;

    let system = DiceBodySystem::new(config.play_volume, config.params)?;
    let body = system.create_body(config.size, config.mass)?;

    let mut core = SimulationCore {
        frame: 0,
        frame_cap: config.frame_cap,
        rng_state: sanitize_seed(config.seed),
        last_events: StepEvents::default(),
        pose_buffer: [0.0; POSE_LEN],
        debug_logging: config.debug_logging,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        system,
        body,
        config,
    };
    core.refresh_pose();

    if core.debug_logging {
        console_log!(
            "dice scene: size={} mass={} volume={:?}",
            core.config.size,
            core.config.mass,
            core.config.play_volume
        );
    }
    Ok(core)
}
