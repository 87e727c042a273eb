pub mod config;
pub mod params;
pub mod play_volume;

pub use config::{SceneConfig, DEFAULT_FRAME_CAP};
pub use params::DiceParams;
pub use play_volume::PlayVolume;
