use crate::core::error::DiceError;
use crate::dice_body::Vec3;
use crate::dice_body_system::StepEvents;

use super::random::random_throw;
use super::SimulationCore;

pub(super) fn init_position(core: &mut SimulationCore, x: f32, y: f32, z: f32) -> Result<(), DiceError> {
    core.body.init_position(x, y, z)?;
    core.refresh_pose();
    Ok(())
}

pub(super) fn throw(core: &mut SimulationCore, impulse: Vec3, spin: Vec3) -> Result<(), DiceError> {
    core.system.throw(&mut core.body, impulse, spin)?;

    // A throw is a fresh run: the frame cap counts from here.
    core.frame = 0;
    core.last_events = StepEvents::default();
    core.refresh_pose();

    if core.debug_logging {
        console_log!("throw: impulse={:?} spin={:?}", impulse, spin);
    }
    Ok(())
}

pub(super) fn throw_random(core: &mut SimulationCore) -> (Vec3, Vec3) {
    let (impulse, spin) = random_throw(&mut core.rng_state, core.system.params());
    // Generated values are always finite.
    if let Err(e) = throw(core, impulse, spin) {
        console_log!("random throw rejected: {}", e);
    }
    (impulse, spin)
}
