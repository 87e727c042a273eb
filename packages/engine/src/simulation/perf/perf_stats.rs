use wasm_bindgen::prelude::*;

use crate::dice_body::Lifecycle;
use crate::dice_body_system::StepEvents;

/// Perf and event counters, accumulated while perf metrics are enabled
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) total_step_ms: f64,
    pub(super) steps: u32,
    pub(super) bounces: u32,
    pub(super) border_hits: u32,
    pub(super) rolling_frames: u32,
    pub(super) last_impact_speed: f32,
    pub(super) frame: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record_step(&mut self, events: &StepEvents, lifecycle: Lifecycle, frame: u64, elapsed_ms: f64) {
        self.step_ms = elapsed_ms;
        self.total_step_ms += elapsed_ms;
        self.steps = self.steps.saturating_add(1);
        if events.bounced {
            self.bounces = self.bounces.saturating_add(1);
        }
        if events.border_x {
            self.border_hits = self.border_hits.saturating_add(1);
        }
        if events.border_z {
            self.border_hits = self.border_hits.saturating_add(1);
        }
        if lifecycle == Lifecycle::Rolling {
            self.rolling_frames = self.rolling_frames.saturating_add(1);
        }
        if events.impact_speed > 0.0 {
            self.last_impact_speed = events.impact_speed;
        }
        self.frame = frame.min(u64::from(u32::MAX)) as u32;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn total_step_ms(&self) -> f64 { self.total_step_ms }
    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> u32 { self.steps }
    #[wasm_bindgen(getter)]
    pub fn bounces(&self) -> u32 { self.bounces }
    #[wasm_bindgen(getter)]
    pub fn border_hits(&self) -> u32 { self.border_hits }
    #[wasm_bindgen(getter)]
    pub fn rolling_frames(&self) -> u32 { self.rolling_frames }
    #[wasm_bindgen(getter)]
    pub fn last_impact_speed(&self) -> f32 { self.last_impact_speed }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u32 { self.frame }
}
