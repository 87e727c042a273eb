//! DiceBody - a cuboid die that moves as a unit
//!
//! The body owns the single authoritative pose (position + per-axis Euler
//! orientation). Renderers read copies of it; nothing aliases it.

mod aabb;
mod body;
mod vec3;

pub use aabb::{compute_aabb, Aabb};
pub use body::{DiceBody, Lifecycle};
pub use vec3::Vec3;
