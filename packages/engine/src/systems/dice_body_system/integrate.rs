use crate::dice_body::{DiceBody, Vec3};

/// Fold the queued impulse and gravity into velocity, then move.
pub(super) fn integrate(body: &mut DiceBody, dt: f32) {
    let force = body.applied_impulse + body.gravity;
    body.applied_impulse = Vec3::zero();

    // Semi-implicit: position uses the already-updated velocity.
    body.velocity += force * (dt / body.mass());
    body.position += body.velocity * dt;
}

/// Advance each Euler angle by its own rate (not a composed rotation).
pub(super) fn rotate(body: &mut DiceBody) {
    body.orientation += body.angular_rate;
}
