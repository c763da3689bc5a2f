//! Randomized initial conditions
//!
//! Randomness is a capability handed to the simulation at construction, so
//! production code can draw from system entropy while tests pin the values.

use std::ops::Range;

use pendulum_physics::{
    ParamsError, PendulumParams, PendulumState, Preset, ARM_LENGTH_MAX, ARM_LENGTH_MIN,
    INITIAL_ANGLE_MAX, INITIAL_ANGLE_MIN, MASS_MAX, MASS_MIN,
};
use rand::Rng;

/// Source of uniformly distributed values.
pub trait RandomSource {
    /// A value in `range`. `range` is never empty.
    fn uniform(&mut self, range: Range<f64>) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self, range: Range<f64>) -> f64 {
        self.random_range(range)
    }
}

/// Always picks the same relative position inside the requested range.
///
/// `FixedFraction(0.0)` yields every lower bound, `FixedFraction(0.5)` every
/// midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedFraction(pub f64);

impl RandomSource for FixedFraction {
    fn uniform(&mut self, range: Range<f64>) -> f64 {
        range.start + (range.end - range.start) * self.0.clamp(0.0, 1.0)
    }
}

/// Draw arm lengths, masses and starting angles.
///
/// Both arms start in the upper half of their circle, at rest.
pub fn random_initial_conditions<R: RandomSource + ?Sized>(
    rng: &mut R,
    preset: Preset,
) -> Result<(PendulumParams, PendulumState), ParamsError> {
    let arm_length1 = rng.uniform(ARM_LENGTH_MIN..ARM_LENGTH_MAX);
    let arm_length2 = rng.uniform(ARM_LENGTH_MIN..ARM_LENGTH_MAX);
    let mass1 = rng.uniform(MASS_MIN..MASS_MAX);
    let mass2 = rng.uniform(MASS_MIN..MASS_MAX);
    let theta1 = rng.uniform(INITIAL_ANGLE_MIN..INITIAL_ANGLE_MAX);
    let theta2 = rng.uniform(INITIAL_ANGLE_MIN..INITIAL_ANGLE_MAX);

    let params = PendulumParams::new(arm_length1, arm_length2, mass1, mass2)?.with_preset(preset)?;

    Ok((params, PendulumState::at_rest(theta1, theta2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fixed_fraction_picks_bounds() {
        let mut low = FixedFraction(0.0);
        let (params, state) = random_initial_conditions(&mut low, Preset::Standard).unwrap();
        assert_eq!(params.arm_length1(), ARM_LENGTH_MIN);
        assert_eq!(params.mass2(), MASS_MIN);
        assert_eq!(state.theta1, INITIAL_ANGLE_MIN);

        let mut mid = FixedFraction(0.5);
        let (params, _) = random_initial_conditions(&mut mid, Preset::Standard).unwrap();
        assert_eq!(params.arm_length2(), 150.0);
        assert_eq!(params.mass1(), 30.0);
    }

    #[test]
    fn test_random_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let (params, state) = random_initial_conditions(&mut rng, Preset::SlowMotion).unwrap();
            assert!((ARM_LENGTH_MIN..ARM_LENGTH_MAX).contains(&params.arm_length1()));
            assert!((ARM_LENGTH_MIN..ARM_LENGTH_MAX).contains(&params.arm_length2()));
            assert!((MASS_MIN..MASS_MAX).contains(&params.mass1()));
            assert!((MASS_MIN..MASS_MAX).contains(&params.mass2()));
            assert!((INITIAL_ANGLE_MIN..INITIAL_ANGLE_MAX).contains(&state.theta1));
            assert!((INITIAL_ANGLE_MIN..INITIAL_ANGLE_MAX).contains(&state.theta2));
            assert_eq!(state.omega1, 0.0);
            assert_eq!(state.omega2, 0.0);
            assert_eq!(params.gravity(), Preset::SlowMotion.gravity());
        }
    }

    #[test]
    fn test_seeded_sources_agree() {
        let a = random_initial_conditions(&mut StdRng::seed_from_u64(42), Preset::Standard);
        let b = random_initial_conditions(&mut StdRng::seed_from_u64(42), Preset::Standard);
        assert_eq!(a, b);
    }
}
