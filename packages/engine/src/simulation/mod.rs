//! SimulationCore - one dice scene
//!
//! Created at scene setup, dropped at teardown. Owns the die exclusively; the
//! renderer only ever sees copies of its pose (`PoseSnapshot` or the pose
//! transfer buffer), refreshed after every step.
//!
//! Work is split by concern, the same way the JS host drives it:
//! - init/      - construction, settings, random throws
//! - commands/  - placing and throwing the die
//! - step/      - frame stepping, frame cap
//! - render/    - pose extraction for the renderer
//! - perf/      - optional per-step timing

use crate::core::error::DiceError;
use crate::dice_body::{Aabb, DiceBody, Lifecycle, Vec3};
use crate::dice_body_system::{DiceBodySystem, StepEvents};
use crate::domain::SceneConfig;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::DiceWorld;
pub use perf_stats::PerfStats;
pub use render_extract::{PoseSnapshot, POSE_LEN};

use perf_timer::PerfTimer;

/// The simulation context for one die
pub struct SimulationCore {
    config: SceneConfig,
    system: DiceBodySystem,
    body: DiceBody,

    // State
    frame: u64,
    frame_cap: u32,
    rng_state: u32,
    last_events: StepEvents,

    // Render transfer
    pose_buffer: [f32; POSE_LEN],

    // Logging / perf
    debug_logging: bool,
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create a scene from a validated config
    pub fn new(config: SceneConfig) -> Result<Self, DiceError> {
        init::create_simulation_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, DiceError> {
        Self::new(SceneConfig::from_json(json)?)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn frame_cap(&self) -> u32 { self.frame_cap }

    pub fn body(&self) -> &DiceBody { &self.body }

    pub fn position(&self) -> Vec3 { self.body.position }

    pub fn orientation(&self) -> Vec3 { self.body.orientation }

    pub fn velocity(&self) -> Vec3 { self.body.velocity }

    pub fn angular_rate(&self) -> Vec3 { self.body.angular_rate }

    pub fn lifecycle(&self) -> Lifecycle { self.body.lifecycle }

    pub fn bounding_box(&self) -> Aabb { self.body.bounding_box() }

    /// Events from the most recent step
    pub fn last_events(&self) -> StepEvents { self.last_events }

    // === SETTINGS ===

    pub fn set_frame_cap(&mut self, cap: u32) {
        settings::set_frame_cap(self, cap);
    }

    pub fn set_debug_logging(&mut self, enabled: bool) {
        settings::set_debug_logging(self, enabled);
    }

    /// Reseed the random-throw generator (0 is replaced by a fixed non-zero seed)
    pub fn set_seed(&mut self, seed: u32) {
        settings::set_seed(self, seed);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === COMMANDS ===

    /// Place the die before throwing it
    pub fn init_position(&mut self, x: f32, y: f32, z: f32) -> Result<(), DiceError> {
        commands::init_position(self, x, y, z)
    }

    /// Throw with an explicit impulse and spin; also restarts a stopped die
    pub fn throw(&mut self, impulse: Vec3, spin: Vec3) -> Result<(), DiceError> {
        commands::throw(self, impulse, spin)
    }

    /// Throw with an impulse and spin drawn from the seeded generator
    pub fn throw_random(&mut self) -> (Vec3, Vec3) {
        commands::throw_random(self)
    }

    // === STEPPING ===

    /// Step one frame (a no-op for a stopped die)
    pub fn step(&mut self, dt: f32) -> StepEvents {
        step::step(self, dt)
    }

    /// Still moving and under the frame cap
    pub fn is_running(&self) -> bool {
        step::is_running(self)
    }

    /// Step only while running; returns whether it is still running afterwards
    pub fn tick(&mut self, dt: f32) -> bool {
        step::tick(self, dt)
    }

    /// Tick until stopped or capped; returns the number of frames stepped
    pub fn run_to_rest(&mut self, dt: f32) -> u32 {
        step::run_to_rest(self, dt)
    }

    // === RENDER ===

    /// Copy of the pose for the renderer
    pub fn pose(&self) -> PoseSnapshot {
        render_extract::snapshot(self)
    }

    /// Pointer to the pose transfer buffer (for JS zero-copy reads)
    pub fn pose_ptr(&self) -> *const f32 {
        self.pose_buffer.as_ptr()
    }

    pub fn pose_len(&self) -> usize {
        POSE_LEN
    }

    pub fn pose_buffer(&self) -> &[f32; POSE_LEN] {
        &self.pose_buffer
    }

    fn refresh_pose(&mut self) {
        render_extract::refresh_pose_buffer(self);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
