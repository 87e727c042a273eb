use serde::{Deserialize, Serialize};

use crate::core::error::DiceError;

/// Rectangular region the die is confined to.
///
/// The floor is the `y = y_min` plane; the four walls are the x/z bounds.
/// `y_max` is carried for the host (camera framing) but nothing collides with it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayVolume {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl PlayVolume {
    pub fn new(
        x_min: f32,
        x_max: f32,
        y_min: f32,
        y_max: f32,
        z_min: f32,
        z_max: f32,
    ) -> Result<Self, DiceError> {
        let volume = Self { x_min, x_max, y_min, y_max, z_min, z_max };
        volume.validate()?;
        Ok(volume)
    }

    /// Zero-size axes are fine; inverted or non-finite ones are not.
    pub fn validate(&self) -> Result<(), DiceError> {
        for (axis, min, max) in [
            ('x', self.x_min, self.x_max),
            ('y', self.y_min, self.y_max),
            ('z', self.z_min, self.z_max),
        ] {
            if !min.is_finite() || !max.is_finite() || min > max {
                return Err(DiceError::InvalidPlayVolume { axis, min, max });
            }
        }
        Ok(())
    }

    /// Wall bounds for a horizontal axis index (0 = x, 2 = z)
    #[inline]
    pub fn wall_bounds(&self, axis: usize) -> (f32, f32) {
        match axis {
            0 => (self.x_min, self.x_max),
            _ => (self.z_min, self.z_max),
        }
    }
}

impl Default for PlayVolume {
    /// 200 x 100 x 200 box with its floor at y = 0
    fn default() -> Self {
        Self {
            x_min: 0.0,
            x_max: 200.0,
            y_min: 0.0,
            y_max: 100.0,
            z_min: 0.0,
            z_max: 200.0,
        }
    }
}
