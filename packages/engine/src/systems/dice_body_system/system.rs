use crate::core::error::DiceError;
use crate::dice_body::{Aabb, DiceBody, Vec3};
use crate::domain::{DiceParams, PlayVolume};

use super::collision::{resolve_floor, resolve_walls};
use super::integrate::{integrate, rotate};

/// What happened during one step
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepEvents {
    /// Fast floor contact reflected the die
    pub bounced: bool,
    /// Slow floor contact switched the die to rolling
    pub started_rolling: bool,
    /// Die came to rest this step
    pub stopped: bool,
    pub border_x: bool,
    pub border_z: bool,
    /// Downward speed at floor contact (0 when there was none)
    pub impact_speed: f32,
    /// Box after floor and wall corrections, before this step's rotation
    pub contact_aabb: Aabb,
}

impl StepEvents {
    pub fn any_collision(&self) -> bool {
        self.bounced || self.started_rolling || self.border_x || self.border_z
    }
}

/// Steps a die inside a play volume
#[derive(Clone, Debug)]
pub struct DiceBodySystem {
    volume: PlayVolume,
    params: DiceParams,
}

impl DiceBodySystem {
    pub fn new(volume: PlayVolume, params: DiceParams) -> Result<Self, DiceError> {
        volume.validate()?;
        params.validate()?;
        Ok(Self { volume, params })
    }

    pub fn volume(&self) -> &PlayVolume {
        &self.volume
    }

    pub fn params(&self) -> &DiceParams {
        &self.params
    }

    /// Create a die using this system's gravity
    pub fn create_body(&self, size: f32, mass: f32) -> Result<DiceBody, DiceError> {
        DiceBody::new(size, mass, self.params.gravity)
    }

    pub fn throw(&self, body: &mut DiceBody, impulse: Vec3, spin: Vec3) -> Result<(), DiceError> {
        body.throw(impulse, spin)
    }

    /// Advance one frame. A stopped die is left exactly as it is.
    ///
    /// `dt` is clamped into `[min_dt, max_dt]` (non-finite becomes `min_dt`).
    /// A step whose result would not be finite is dropped and the body keeps
    /// its previous state.
    pub fn step(&self, body: &mut DiceBody, dt: f32) -> StepEvents {
        let mut events = StepEvents::default();
        if body.is_stopped() {
            events.contact_aabb = body.bounding_box();
            return events;
        }

        let dt = if dt.is_finite() {
            dt.clamp(self.params.min_dt, self.params.max_dt)
        } else {
            self.params.min_dt
        };

        let before = body.clone();
        integrate(body, dt);
        resolve_floor(body, &self.volume, &self.params, &mut events);
        if !body.is_stopped() {
            resolve_walls(body, &self.volume, &self.params, &mut events);
        }
        events.contact_aabb = body.bounding_box();
        rotate(body);

        if !body.is_finite() {
            *body = before;
            return StepEvents {
                contact_aabb: body.bounding_box(),
                ..StepEvents::default()
            };
        }
        events
    }
}
