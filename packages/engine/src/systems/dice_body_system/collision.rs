use crate::dice_body::{DiceBody, Lifecycle, Vec3};
use crate::domain::{DiceParams, PlayVolume};

use super::rolling::roll;
use super::system::StepEvents;

/// Floor contact and the lifecycle branch it drives.
///
/// A rolling die is always treated as in contact: with gravity gone nothing
/// else keeps it on the floor, so its box is settled back onto the plane each
/// step (pushed up on penetration, lowered when rotation shrinks the box).
pub(super) fn resolve_floor(
    body: &mut DiceBody,
    volume: &PlayVolume,
    params: &DiceParams,
    events: &mut StepEvents,
) {
    let aabb = body.bounding_box();
    let rolling = body.lifecycle == Lifecycle::Rolling;
    if aabb.min.y >= volume.y_min && !rolling {
        return;
    }

    body.position.y += volume.y_min - aabb.min.y;

    match body.lifecycle {
        Lifecycle::Rolling => {
            events.stopped = roll(body, volume, params);
            if !events.stopped {
                // tipping changed the box
                body.position.y += volume.y_min - body.bounding_box().min.y;
            }
        }
        Lifecycle::Flying if body.velocity.y < -params.bounce_threshold => {
            events.impact_speed = -body.velocity.y;
            body.velocity.y = -body.velocity.y;
            body.velocity *= params.bounce_velocity_damping;
            body.angular_rate *= params.bounce_spin_damping;
            events.bounced = true;
        }
        Lifecycle::Flying if body.velocity.y <= 0.0 => {
            events.impact_speed = -body.velocity.y;
            body.lifecycle = Lifecycle::Rolling;
            body.gravity = Vec3::zero();
            events.started_rolling = true;
        }
        // Rising while the spin swings a corner through the floor: push-out only.
        Lifecycle::Flying | Lifecycle::Stopped => {}
    }
}

/// Wall contacts, x then z, each against a freshly computed box.
///
/// A hit clamps the die against the wall, reflects that velocity component and
/// damps like a bounce, and also reverses the spin. A die wider than the gap
/// between two walls is centred between them and stops moving on that axis.
pub(super) fn resolve_walls(
    body: &mut DiceBody,
    volume: &PlayVolume,
    params: &DiceParams,
    events: &mut StepEvents,
) {
    for axis in [0usize, 2] {
        let aabb = body.bounding_box();
        let (lo, hi) = volume.wall_bounds(axis);

        if aabb.max.axis(axis) - aabb.min.axis(axis) > hi - lo {
            *body.position.axis_mut(axis) = (lo + hi) * 0.5;
            *body.velocity.axis_mut(axis) = 0.0;
            flag_border(events, axis);
            continue;
        }

        let correction = if aabb.min.axis(axis) < lo {
            lo - aabb.min.axis(axis)
        } else if aabb.max.axis(axis) > hi {
            hi - aabb.max.axis(axis)
        } else {
            continue;
        };

        *body.position.axis_mut(axis) += correction;
        let v = body.velocity.axis_mut(axis);
        *v = -*v;
        body.velocity *= params.bounce_velocity_damping;
        body.angular_rate *= -params.bounce_spin_damping;

        flag_border(events, axis);
    }
}

fn flag_border(events: &mut StepEvents, axis: usize) {
    if axis == 0 {
        events.border_x = true;
    } else {
        events.border_z = true;
    }
}
