//! Time-varying state of a double pendulum

/// Angles and angular velocities of both arms.
///
/// `theta1` is measured at the pivot, `theta2` at the tip of arm 1. Zero
/// points straight down. Angles are never wrapped: they accumulate for the
/// lifetime of a run, only their sine and cosine are ever read.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PendulumState {
    pub theta1: f64,
    pub theta2: f64,
    pub omega1: f64,
    pub omega2: f64,
}

impl PendulumState {
    /// Both arms at the given angles, not moving.
    pub fn at_rest(theta1: f64, theta2: f64) -> Self {
        Self {
            theta1,
            theta2,
            omega1: 0.0,
            omega2: 0.0,
        }
    }

    /// True when no component has blown up to NaN or infinity.
    pub fn is_finite(&self) -> bool {
        self.theta1.is_finite()
            && self.theta2.is_finite()
            && self.omega1.is_finite()
            && self.omega2.is_finite()
    }
}
