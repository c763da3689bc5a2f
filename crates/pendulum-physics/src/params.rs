//! Physical parameters of a double pendulum

use crate::constants::{DAMPING, GRAVITY, NO_DAMPING, SLOW_MOTION_GRAVITY};
use crate::error::ParamsError;

/// Arm lengths, pendant masses, gravity and damping.
///
/// Fields are private: once a value is built and handed to a simulation it
/// cannot change. Use the consuming `with_*` builders to derive a new value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendulumParams {
    arm_length1: f64,
    arm_length2: f64,
    mass1: f64,
    mass2: f64,
    gravity: f64,
    damping: f64,
}

impl PendulumParams {
    /// Create parameters with the canonical gravity and damping.
    pub fn new(
        arm_length1: f64,
        arm_length2: f64,
        mass1: f64,
        mass2: f64,
    ) -> Result<Self, ParamsError> {
        for (arm, value) in [(1, arm_length1), (2, arm_length2)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParamsError::InvalidArmLength { arm, value });
            }
        }
        for (pendant, value) in [(1, mass1), (2, mass2)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParamsError::InvalidMass { pendant, value });
            }
        }

        Ok(Self {
            arm_length1,
            arm_length2,
            mass1,
            mass2,
            gravity: GRAVITY,
            damping: DAMPING,
        })
    }

    pub fn with_gravity(mut self, gravity: f64) -> Result<Self, ParamsError> {
        if !gravity.is_finite() {
            return Err(ParamsError::InvalidGravity(gravity));
        }
        self.gravity = gravity;
        Ok(self)
    }

    pub fn with_damping(mut self, damping: f64) -> Result<Self, ParamsError> {
        if !(damping > 0.0 && damping <= 1.0) {
            return Err(ParamsError::InvalidDamping(damping));
        }
        self.damping = damping;
        Ok(self)
    }

    /// Apply the gravity and damping of a preset.
    pub fn with_preset(self, preset: Preset) -> Result<Self, ParamsError> {
        self.with_gravity(preset.gravity())?
            .with_damping(preset.damping())
    }

    pub fn arm_length1(&self) -> f64 {
        self.arm_length1
    }

    pub fn arm_length2(&self) -> f64 {
        self.arm_length2
    }

    pub fn mass1(&self) -> f64 {
        self.mass1
    }

    pub fn mass2(&self) -> f64 {
        self.mass2
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }
}

/// Named gravity/damping combinations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    /// Canonical parameter set
    #[default]
    Standard,
    /// Weaker gravity for slower, more legible motion
    SlowMotion,
    /// Standard gravity with damping disabled
    Frictionless,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Standard, Preset::SlowMotion, Preset::Frictionless];

    pub fn gravity(self) -> f64 {
        match self {
            Preset::Standard | Preset::Frictionless => GRAVITY,
            Preset::SlowMotion => SLOW_MOTION_GRAVITY,
        }
    }

    pub fn damping(self) -> f64 {
        match self {
            Preset::Standard | Preset::SlowMotion => DAMPING,
            Preset::Frictionless => NO_DAMPING,
        }
    }

    /// Next preset in `ALL`, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Standard => "Standard",
            Preset::SlowMotion => "Slow Motion",
            Preset::Frictionless => "Frictionless",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_canonical_gravity_and_damping() {
        let params = PendulumParams::new(100.0, 150.0, 20.0, 30.0).unwrap();
        assert_eq!(params.gravity(), GRAVITY);
        assert_eq!(params.damping(), DAMPING);
        assert_eq!(params.arm_length2(), 150.0);
        assert_eq!(params.mass1(), 20.0);
    }

    #[test]
    fn test_rejects_non_positive_geometry() {
        assert_eq!(
            PendulumParams::new(0.0, 150.0, 20.0, 30.0),
            Err(ParamsError::InvalidArmLength { arm: 1, value: 0.0 })
        );
        assert_eq!(
            PendulumParams::new(100.0, 150.0, 20.0, -5.0),
            Err(ParamsError::InvalidMass {
                pendant: 2,
                value: -5.0
            })
        );
        assert!(PendulumParams::new(f64::NAN, 150.0, 20.0, 30.0).is_err());
        assert!(PendulumParams::new(100.0, f64::INFINITY, 20.0, 30.0).is_err());
    }

    #[test]
    fn test_damping_range() {
        let params = PendulumParams::new(100.0, 150.0, 20.0, 30.0).unwrap();
        assert!(params.with_damping(1.0).is_ok());
        assert!(params.with_damping(0.5).is_ok());
        assert_eq!(
            params.with_damping(0.0),
            Err(ParamsError::InvalidDamping(0.0))
        );
        assert!(params.with_damping(1.0001).is_err());
        assert!(params.with_damping(f64::NAN).is_err());
    }

    #[test]
    fn test_gravity_must_be_finite() {
        let params = PendulumParams::new(100.0, 150.0, 20.0, 30.0).unwrap();
        assert!(params.with_gravity(0.0).is_ok());
        assert!(params.with_gravity(f64::INFINITY).is_err());
    }

    #[test]
    fn test_presets() {
        let params = PendulumParams::new(100.0, 150.0, 20.0, 30.0)
            .unwrap()
            .with_preset(Preset::SlowMotion)
            .unwrap();
        assert_eq!(params.gravity(), SLOW_MOTION_GRAVITY);
        assert_eq!(params.damping(), DAMPING);

        assert_eq!(Preset::Frictionless.damping(), 1.0);
        assert_eq!(Preset::default(), Preset::Standard);
    }

    #[test]
    fn test_preset_cycle_wraps() {
        let mut preset = Preset::Standard;
        for _ in 0..Preset::ALL.len() {
            preset = preset.next();
        }
        assert_eq!(preset, Preset::Standard);
        assert_eq!(Preset::Standard.next(), Preset::SlowMotion);
        assert_eq!(Preset::Frictionless.next(), Preset::Standard);
    }
}
