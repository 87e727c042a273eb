use crate::dice_body::{Lifecycle, Vec3};

use super::SimulationCore;

/// Floats in the pose transfer buffer:
/// `[px, py, pz, rx, ry, rz, lifecycle]`
pub const POSE_LEN: usize = 7;

/// Renderer-side copy of the die's pose
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseSnapshot {
    pub position: Vec3,
    /// Euler angles, XYZ order
    pub orientation: Vec3,
    pub lifecycle: Lifecycle,
    pub frame: u64,
}

pub(super) fn snapshot(core: &SimulationCore) -> PoseSnapshot {
    PoseSnapshot {
        position: core.body.position,
        orientation: core.body.orientation,
        lifecycle: core.body.lifecycle,
        frame: core.frame,
    }
}

pub(super) fn refresh_pose_buffer(core: &mut SimulationCore) {
    let p = core.body.position;
    let r = core.body.orientation;
    core.pose_buffer = [p.x, p.y, p.z, r.x, r.y, r.z, f32::from(core.body.lifecycle.code())];
}
