use serde::{Deserialize, Serialize};

use crate::core::error::DiceError;

/// Tuning constants for flight, bounce, roll and rest.
///
/// Units follow the host's frame-stepped model: distances in scene units,
/// time in frames (the page steps with `dt = 1`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiceParams {
    /// Gravitational acceleration; the gravity force is `mass * gravity`.
    pub gravity: f32,
    /// Smallest timestep ever integrated.
    pub min_dt: f32,
    /// Largest timestep ever integrated; longer frames are clamped to it.
    pub max_dt: f32,
    /// Downward speed above which a floor contact bounces instead of rolling.
    pub bounce_threshold: f32,
    /// Velocity kept after a floor bounce or wall hit.
    pub bounce_velocity_damping: f32,
    /// Angular rate kept after a floor bounce or wall hit.
    pub bounce_spin_damping: f32,
    /// Per-step decay of velocity and angular rate while rolling.
    pub rolling_damping: f32,
    /// Angular rate magnitude under which a rolling die may stop.
    pub stop_rate_threshold: f32,
    /// Max distance (radians) from a quarter-turn multiple that counts as resting flat.
    pub rest_tolerance: f32,
    /// Angle per step a rolling die tips toward its nearest face once an axis has lost its spin.
    pub settle_rate: f32,
    /// Upper bound for each component of a random throw impulse.
    pub random_impulse_max: f32,
    /// Upper bound for each component of a random throw spin.
    pub random_spin_max: f32,
}

impl Default for DiceParams {
    fn default() -> Self {
        Self {
            gravity: 0.098,
            min_dt: 0.1,
            max_dt: 10.0,
            bounce_threshold: 0.7,
            bounce_velocity_damping: 0.7,
            bounce_spin_damping: 0.8,
            rolling_damping: 0.9,
            stop_rate_threshold: 0.01,
            rest_tolerance: 0.05,
            settle_rate: 0.005,
            random_impulse_max: 30.0,
            random_spin_max: 0.15,
        }
    }
}

impl DiceParams {
    pub fn validate(&self) -> Result<(), DiceError> {
        let unit_open = |name: &'static str, value: f32| {
            if value.is_finite() && value > 0.0 && value < 1.0 {
                Ok(())
            } else {
                Err(DiceError::InvalidParameter { name, value })
            }
        };
        let non_negative = |name: &'static str, value: f32| {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(DiceError::InvalidParameter { name, value })
            }
        };

        non_negative("gravity", self.gravity)?;
        if !self.min_dt.is_finite() || self.min_dt <= 0.0 {
            return Err(DiceError::InvalidParameter { name: "min_dt", value: self.min_dt });
        }
        if !self.max_dt.is_finite() || self.max_dt < self.min_dt {
            return Err(DiceError::InvalidParameter { name: "max_dt", value: self.max_dt });
        }
        non_negative("bounce_threshold", self.bounce_threshold)?;
        unit_open("bounce_velocity_damping", self.bounce_velocity_damping)?;
        unit_open("bounce_spin_damping", self.bounce_spin_damping)?;
        unit_open("rolling_damping", self.rolling_damping)?;
        non_negative("stop_rate_threshold", self.stop_rate_threshold)?;
        non_negative("rest_tolerance", self.rest_tolerance)?;
        non_negative("settle_rate", self.settle_rate)?;
        non_negative("random_impulse_max", self.random_impulse_max)?;
        non_negative("random_spin_max", self.random_spin_max)?;
        Ok(())
    }
}
