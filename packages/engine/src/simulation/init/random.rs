use crate::dice_body::Vec3;
use crate::domain::DiceParams;

/// Replaces a zero seed, which would lock xorshift at zero forever.
pub(super) const FALLBACK_SEED: u32 = 12345;

/// Random number generator (xorshift32)
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[inline]
pub(super) fn sanitize_seed(seed: u32) -> u32 {
    if seed == 0 { FALLBACK_SEED } else { seed }
}

/// Uniform in [-1, 1]
#[inline]
fn signed_unit(state: &mut u32) -> f32 {
    let r = xorshift32(state) >> 8; // 24 bits fit exactly in f32
    (r as f32 / ((1u32 << 24) - 1) as f32) * 2.0 - 1.0
}

/// Draw a throw: mostly sideways impulse, a little upward kick, spin on all axes.
pub(super) fn random_throw(state: &mut u32, params: &DiceParams) -> (Vec3, Vec3) {
    let imp = params.random_impulse_max;
    let spin = params.random_spin_max;

    let impulse = Vec3::new(
        signed_unit(state) * imp,
        signed_unit(state).abs() * imp * 0.25,
        signed_unit(state) * imp,
    );
    let spin = Vec3::new(
        signed_unit(state) * spin,
        signed_unit(state) * spin,
        signed_unit(state) * spin,
    );
    (impulse, spin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xorshift_is_deterministic_and_nonzero() {
        let mut a = 12345;
        let mut b = 12345;
        for _ in 0..100 {
            let x = xorshift32(&mut a);
            assert_eq!(x, xorshift32(&mut b));
            assert_ne!(x, 0);
        }
    }

    #[test]
    fn zero_seed_is_replaced() {
        assert_eq!(sanitize_seed(0), FALLBACK_SEED);
        assert_eq!(sanitize_seed(7), 7);
    }

    #[test]
    fn random_throw_respects_bounds() {
        let params = DiceParams::default();
        let mut state = 99;
        for _ in 0..200 {
            let (impulse, spin) = random_throw(&mut state, &params);
            assert!(impulse.x.abs() <= params.random_impulse_max);
            assert!(impulse.z.abs() <= params.random_impulse_max);
            assert!(impulse.y >= 0.0 && impulse.y <= params.random_impulse_max * 0.25);
            assert!(spin.x.abs() <= params.random_spin_max);
            assert!(spin.y.abs() <= params.random_spin_max);
            assert!(spin.z.abs() <= params.random_spin_max);
        }
    }
}
