//! Dicethrow Engine - dice throw physics for the browser dice visualization
//!
//! The page owns rendering (scene, camera, lights, floor mesh); this crate owns
//! what the die does: flight under gravity, floor bounces, rolling, coming to
//! rest, and staying inside the play area.
//!
//! Layout:
//! - core/        - logging macro, error type
//! - domain/      - play volume, tuning parameters, scene config
//! - systems/     - the die body and the system that steps it
//! - simulation/  - per-scene context + JS facade

// Macros first so every later module can use them.
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use systems::dice_body;
pub use systems::dice_body_system;

use wasm_bindgen::prelude::*;

// Path used by `console_log!` when expanded in other crates.
#[doc(hidden)]
pub use web_sys as __web_sys;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

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

    console_log!("🎲 Dicethrow WASM Engine initialized!");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::error::DiceError;
pub use dice_body::{Aabb, DiceBody, Lifecycle, Vec3};
pub use dice_body_system::{DiceBodySystem, StepEvents};
pub use domain::{DiceParams, PlayVolume, SceneConfig};
pub use simulation::{DiceWorld, PerfStats, PoseSnapshot, SimulationCore};

#[wasm_bindgen]
pub fn lifecycle_flying() -> u8 { Lifecycle::Flying.code() }
#[wasm_bindgen]
pub fn lifecycle_rolling() -> u8 { Lifecycle::Rolling.code() }
#[wasm_bindgen]
pub fn lifecycle_stopped() -> u8 { Lifecycle::Stopped.code() }
