use dicethrow_engine::{console_log, Lifecycle, Vec3};

#[test]
fn console_log_expands_outside_the_crate() {
    let frame = 12u64;
    console_log!("frame {}: {}", frame, Lifecycle::Rolling.as_str());
    console_log!("impulse {:?}", Vec3::new(1.0, 0.0, -2.0));
    dicethrow_engine::console_log!("plain");
}
