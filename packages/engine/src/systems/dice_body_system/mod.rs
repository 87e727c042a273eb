//! DiceBodySystem - flight, bounce, roll and rest for one cuboid die
//!
//! No inertia tensor, no contact manifold:
//! - Semi-implicit Euler for position; per-axis additive Euler angles for rotation.
//! - One AABB-vs-plane test for the floor, per-axis AABB tests for the walls.
//! - Lifecycle `Flying -> Rolling -> Stopped` driven by floor contacts.
//!
//! Per-step order: integrate, floor (roll + settle), wall x, wall z, rotate.

mod collision;
mod integrate;
mod rolling;
mod system;

pub use rolling::{rest_offset, snap_to_rest, QUARTER_TURN};
pub use system::{DiceBodySystem, StepEvents};
