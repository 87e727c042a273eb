use crate::core::error::DiceError;

use super::aabb::{compute_aabb, Aabb};
use super::vec3::Vec3;

/// Where the die is in its throw.
///
/// Only ever advances `Flying -> Rolling -> Stopped` within one throw; a new
/// throw is the only way back to `Flying`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Flying,
    Rolling,
    Stopped,
}

impl Lifecycle {
    /// Numeric code shared with the JS host
    pub fn code(self) -> u8 {
        match self {
            Lifecycle::Flying => 0,
            Lifecycle::Rolling => 1,
            Lifecycle::Stopped => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lifecycle::Flying => "flying",
            Lifecycle::Rolling => "rolling",
            Lifecycle::Stopped => "stopped",
        }
    }
}

/// Cuboid die - moves as a single unit
#[derive(Clone, Debug)]
pub struct DiceBody {
    // === Shape (immutable) ===
    size: f32,
    half_size: f32,
    mass: f32,
    /// Gravitational acceleration this body was created with (per step²)
    gravity_accel: f32,

    // === Physics State ===
    /// World position (center of mass)
    pub position: Vec3,
    /// Accumulated Euler angles per axis (radians)
    pub orientation: Vec3,
    /// Velocity (units per step)
    pub velocity: Vec3,
    /// Rotation increment per step, added to `orientation` axis by axis
    pub angular_rate: Vec3,
    /// Gravity force; zeroed for good once the body starts rolling
    pub gravity: Vec3,
    /// Force accumulator, cleared after each integration
    pub applied_impulse: Vec3,
    pub lifecycle: Lifecycle,
}

impl DiceBody {
    /// Create a die of edge length `size` at the origin with no rotation.
    pub fn new(size: f32, mass: f32, gravity_accel: f32) -> Result<Self, DiceError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(DiceError::InvalidDimension { field: "size", value: size });
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(DiceError::InvalidDimension { field: "mass", value: mass });
        }
        if !gravity_accel.is_finite() {
            return Err(DiceError::InvalidParameter {
                name: "gravity",
                value: gravity_accel,
            });
        }

        Ok(Self {
            size,
            half_size: size / 2.0,
            mass,
            gravity_accel,
            position: Vec3::zero(),
            orientation: Vec3::zero(),
            velocity: Vec3::zero(),
            angular_rate: Vec3::zero(),
            gravity: Self::gravity_force(mass, gravity_accel),
            applied_impulse: Vec3::zero(),
            lifecycle: Lifecycle::Flying,
        })
    }

    #[inline]
    fn gravity_force(mass: f32, accel: f32) -> Vec3 {
        Vec3::new(0.0, -mass * accel, 0.0)
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn half_size(&self) -> f32 {
        self.half_size
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn is_stopped(&self) -> bool {
        self.lifecycle == Lifecycle::Stopped
    }

    /// Place the die (center of mass) at an explicit position.
    pub fn init_position(&mut self, x: f32, y: f32, z: f32) -> Result<(), DiceError> {
        let position = Vec3::new(x, y, z);
        if !position.is_finite() {
            return Err(DiceError::NonFiniteInput { context: "init_position" });
        }
        self.position = position;
        Ok(())
    }

    /// Start a throw: velocity reset, impulse queued for the next step, spin set.
    ///
    /// Also restores gravity, so throwing a rolling or stopped die starts a
    /// fresh flight.
    pub fn throw(&mut self, impulse: Vec3, spin: Vec3) -> Result<(), DiceError> {
        if !impulse.is_finite() {
            return Err(DiceError::NonFiniteInput { context: "throw impulse" });
        }
        if !spin.is_finite() {
            return Err(DiceError::NonFiniteInput { context: "throw spin" });
        }

        self.velocity = Vec3::zero();
        self.applied_impulse = impulse;
        self.angular_rate = spin;
        self.gravity = Self::gravity_force(self.mass, self.gravity_accel);
        self.lifecycle = Lifecycle::Flying;
        Ok(())
    }

    /// Pose and motion are all finite
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.orientation.is_finite()
            && self.velocity.is_finite()
            && self.angular_rate.is_finite()
    }

    /// Bounding box of the current pose
    #[inline]
    pub fn bounding_box(&self) -> Aabb {
        compute_aabb(self.position, self.half_size, self.orientation)
    }
}
