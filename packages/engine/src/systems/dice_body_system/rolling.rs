use std::f32::consts::FRAC_PI_2;

use crate::dice_body::{DiceBody, Lifecycle, Vec3};
use crate::domain::{DiceParams, PlayVolume};

/// A cube lies flat whenever every Euler angle is a multiple of this.
pub const QUARTER_TURN: f32 = FRAC_PI_2;

/// Signed distance from `angle` to the nearest quarter-turn multiple.
#[inline]
pub fn rest_offset(angle: f32) -> f32 {
    angle - snap_to_rest(angle)
}

/// Nearest quarter-turn multiple.
#[inline]
pub fn snap_to_rest(angle: f32) -> f32 {
    (angle / QUARTER_TURN).round() * QUARTER_TURN
}

#[inline]
fn near_rest(angle: f32, tolerance: f32) -> bool {
    rest_offset(angle).abs() <= tolerance
}

/// One rolling step while in floor contact. Returns true when the die came to rest.
///
/// Velocity and spin decay by `rolling_damping`. Once an axis has lost its
/// spin but is still off a face, the die tips toward the nearest face by up to
/// `settle_rate` per step, so it lands flat instead of freezing on an edge.
pub(super) fn roll(body: &mut DiceBody, volume: &PlayVolume, params: &DiceParams) -> bool {
    body.velocity *= params.rolling_damping;
    body.angular_rate *= params.rolling_damping;

    for i in 0..3 {
        if body.angular_rate.axis(i).abs() >= params.settle_rate {
            continue;
        }
        let offset = rest_offset(body.orientation.axis(i));
        if offset.abs() > params.rest_tolerance {
            *body.orientation.axis_mut(i) -= params.settle_rate.min(offset.abs()).copysign(offset);
        }
    }

    let slow = body.angular_rate.length() < params.stop_rate_threshold;
    let flat = (0..3).all(|i| near_rest(body.orientation.axis(i), params.rest_tolerance));
    if slow && flat {
        come_to_rest(body, volume);
        return true;
    }
    false
}

/// Freeze the die lying flat on the floor.
fn come_to_rest(body: &mut DiceBody, volume: &PlayVolume) {
    body.angular_rate = Vec3::zero();
    body.velocity = Vec3::zero();
    for i in 0..3 {
        let snapped = snap_to_rest(body.orientation.axis(i));
        *body.orientation.axis_mut(i) = snapped;
    }
    body.position.y = volume.y_min + body.half_size();
    body.lifecycle = Lifecycle::Stopped;
}
