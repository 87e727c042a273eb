use serde::{Deserialize, Serialize};

use crate::core::error::DiceError;

use super::params::DiceParams;
use super::play_volume::PlayVolume;

/// Frames after which the host loop gives up on a throw.
pub const DEFAULT_FRAME_CAP: u32 = 1000;

/// Everything needed to set up one dice scene.
///
/// Every field has a default, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub play_volume: PlayVolume,
    /// Edge length of the cube
    pub size: f32,
    pub mass: f32,
    pub params: DiceParams,
    pub frame_cap: u32,
    /// Seed for random throws (xorshift32, must be non-zero)
    pub seed: u32,
    pub debug_logging: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            play_volume: PlayVolume::default(),
            size: 10.0,
            mass: 10.0,
            params: DiceParams::default(),
            frame_cap: DEFAULT_FRAME_CAP,
            seed: 12345,
            debug_logging: false,
        }
    }
}

impl SceneConfig {
    pub fn new(play_volume: PlayVolume, size: f32, mass: f32) -> Self {
        Self {
            play_volume,
            size,
            mass,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, DiceError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, DiceError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), DiceError> {
        self.play_volume.validate()?;
        self.params.validate()?;
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(DiceError::InvalidDimension { field: "size", value: self.size });
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(DiceError::InvalidDimension { field: "mass", value: self.mass });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = SceneConfig::from_json("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn partial_json_overrides_only_given_fields() {
        let config = SceneConfig::from_json(
            r#"{ "size": 4, "params": { "rolling_damping": 0.5 }, "play_volume": {
                "x_min": -10, "x_max": 10, "y_min": 0, "y_max": 20, "z_min": -10, "z_max": 10 } }"#,
        )
        .unwrap();
        assert_eq!(config.size, 4.0);
        assert_eq!(config.mass, 10.0);
        assert_eq!(config.params.rolling_damping, 0.5);
        assert_eq!(config.params.bounce_threshold, DiceParams::default().bounce_threshold);
        assert_eq!(config.play_volume.x_min, -10.0);
    }

    #[test]
    fn invalid_values_fail_validation() {
        assert!(matches!(
            SceneConfig::from_json(r#"{ "mass": 0 }"#),
            Err(DiceError::InvalidDimension { field: "mass", .. })
        ));
        assert!(matches!(SceneConfig::from_json("[1, 2"), Err(DiceError::Config(_))));
    }

    #[test]
    fn to_json_round_trips() {
        let config = SceneConfig { frame_cap: 250, debug_logging: true, ..SceneConfig::default() };
        let back = SceneConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn to_json_writes_every_field() {
        let json = SceneConfig::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        for key in ["play_volume", "size", "mass", "params", "frame_cap", "seed", "debug_logging"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["params"]["max_dt"], serde_json::json!(10.0));
    }
}
