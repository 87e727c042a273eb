use wasm_bindgen::prelude::*;

use crate::core::error::DiceError;
use crate::dice_body::Vec3;
use crate::domain::{PlayVolume, SceneConfig};

use super::perf_stats::PerfStats;
use super::SimulationCore;

fn to_js(e: DiceError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// JS handle for one dice scene
#[wasm_bindgen]
pub struct DiceWorld {
    core: SimulationCore,
}

#[wasm_bindgen]
impl DiceWorld {
    /// Create a scene with the given play volume and die, default tuning
    #[wasm_bindgen(constructor)]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x_min: f32,
        x_max: f32,
        y_min: f32,
        y_max: f32,
        z_min: f32,
        z_max: f32,
        size: f32,
        mass: f32,
    ) -> Result<DiceWorld, JsValue> {
        let volume = PlayVolume::new(x_min, x_max, y_min, y_max, z_min, z_max).map_err(to_js)?;
        let core = SimulationCore::new(SceneConfig::new(volume, size, mass)).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Create a scene from a JSON `SceneConfig` (missing fields use defaults)
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<DiceWorld, JsValue> {
        let core = SimulationCore::from_config_json(json).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Effective config as JSON
    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsValue> {
        self.core.config().to_json().map_err(to_js)
    }

    #[wasm_bindgen(js_name = initPosition)]
    pub fn init_position(&mut self, x: f32, y: f32, z: f32) -> Result<(), JsValue> {
        self.core.init_position(x, y, z).map_err(to_js)
    }

    /// Throw with impulse (ix, iy, iz) and spin rate (sx, sy, sz) per frame
    #[wasm_bindgen(js_name = throwDice)]
    pub fn throw_dice(&mut self, ix: f32, iy: f32, iz: f32, sx: f32, sy: f32, sz: f32) -> Result<(), JsValue> {
        self.core
            .throw(Vec3::new(ix, iy, iz), Vec3::new(sx, sy, sz))
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = throwRandom)]
    pub fn throw_random(&mut self) {
        self.core.throw_random();
    }

    /// Step one frame; returns true if anything hit the floor or a wall
    pub fn step(&mut self, dt: f32) -> bool {
        self.core.step(dt).any_collision()
    }

    /// Step only while moving and under the frame cap; false once done
    pub fn tick(&mut self, dt: f32) -> bool {
        self.core.tick(dt)
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// 0 = flying, 1 = rolling, 2 = stopped
    #[wasm_bindgen(getter)]
    pub fn lifecycle(&self) -> u8 { self.core.lifecycle().code() }

    #[wasm_bindgen(js_name = isStopped)]
    pub fn is_stopped(&self) -> bool { self.core.body().is_stopped() }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool { self.core.is_running() }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 { self.core.position().x }
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 { self.core.position().y }
    #[wasm_bindgen(getter)]
    pub fn z(&self) -> f32 { self.core.position().z }

    #[wasm_bindgen(getter)]
    pub fn rotation_x(&self) -> f32 { self.core.orientation().x }
    #[wasm_bindgen(getter)]
    pub fn rotation_y(&self) -> f32 { self.core.orientation().y }
    #[wasm_bindgen(getter)]
    pub fn rotation_z(&self) -> f32 { self.core.orientation().z }

    /// Pointer to `[px, py, pz, rx, ry, rz, lifecycle]` in wasm memory
    pub fn pose_ptr(&self) -> *const f32 {
        self.core.pose_ptr()
    }

    pub fn pose_len(&self) -> usize {
        self.core.pose_len()
    }

    pub fn set_frame_cap(&mut self, cap: u32) {
        self.core.set_frame_cap(cap);
    }

    pub fn set_debug_logging(&mut self, enabled: bool) {
        self.core.set_debug_logging(enabled);
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

impl DiceWorld {
    /// Native access to the scene (tests, non-JS hosts)
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut SimulationCore {
        &mut self.core
    }
}
