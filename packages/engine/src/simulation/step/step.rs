use crate::dice_body_system::StepEvents;

use super::{PerfTimer, SimulationCore};

pub(super) fn step(core: &mut SimulationCore, dt: f32) -> StepEvents {
    let perf_on = core.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let was_stopped = core.body.is_stopped();
    let events = core.system.step(&mut core.body, dt);
    core.last_events = events;

    if !was_stopped {
        core.frame += 1;
        core.refresh_pose();
        if core.debug_logging {
            log_events(core, &events);
        }
    }

    if let Some(start) = step_start {
        core.perf_stats.record_step(&events, core.body.lifecycle, core.frame, start.elapsed_ms());
    }

    events
}

pub(super) fn is_running(core: &SimulationCore) -> bool {
    !core.body.is_stopped() && core.frame < u64::from(core.frame_cap)
}

pub(super) fn tick(core: &mut SimulationCore, dt: f32) -> bool {
    if !is_running(core) {
        return false;
    }
    step(core, dt);

    let running = is_running(core);
    if !running && !core.body.is_stopped() && core.debug_logging {
        console_log!("frame {}: frame cap reached, giving up", core.frame);
    }
    running
}

pub(super) fn run_to_rest(core: &mut SimulationCore, dt: f32) -> u32 {
    let mut frames = 0u32;
    while is_running(core) {
        step(core, dt);
        frames += 1;
    }
    frames
}

fn log_events(core: &SimulationCore, events: &StepEvents) {
    let frame = core.frame;
    if events.bounced {
        console_log!("frame {}: bounce (impact {:.3})", frame, events.impact_speed);
    }
    if events.started_rolling {
        console_log!("frame {}: rolling", frame);
    }
    if events.border_x || events.border_z {
        console_log!("frame {}: border hit (x={} z={})", frame, events.border_x, events.border_z);
    }
    if events.stopped {
        console_log!("frame {}: stopped at {:?}", frame, core.body.position);
    }
}
