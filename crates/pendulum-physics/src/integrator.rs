//! Equations of motion and the per-tick integrator
//!
//! The accelerations are the closed-form Lagrangian equations for two point
//! masses on massless rigid arms. One call to [`Integrator::step`] advances
//! the state by exactly one tick; there is no wall-clock dependency.

use crate::constants::MAX_ANGULAR_VELOCITY;
use crate::params::PendulumParams;
use crate::state::PendulumState;

/// Order in which velocities and angles are updated within a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegrationScheme {
    /// Velocity first, then damping and the speed bound, then angles from
    /// the new velocity
    #[default]
    SemiImplicitEuler,
    /// Angles advance with the old velocity, then velocity updates, damps
    /// and is bounded
    ExplicitEuler,
}

/// Denominators of the two acceleration equations.
///
/// Both share the bracket `2*m1 + m2 - m2*cos(2*theta1 - 2*theta2)`, which is
/// at least `2*m1` for positive masses.
pub fn denominators(state: &PendulumState, params: &PendulumParams) -> (f64, f64) {
    let m1 = params.mass1();
    let m2 = params.mass2();
    let bracket = 2.0 * m1 + m2 - m2 * (2.0 * state.theta1 - 2.0 * state.theta2).cos();
    (params.arm_length1() * bracket, params.arm_length2() * bracket)
}

/// Angular accelerations `(alpha1, alpha2)` for the current state.
pub fn angular_accelerations(state: &PendulumState, params: &PendulumParams) -> (f64, f64) {
    let PendulumState {
        theta1,
        theta2,
        omega1,
        omega2,
    } = *state;
    let l1 = params.arm_length1();
    let l2 = params.arm_length2();
    let m1 = params.mass1();
    let m2 = params.mass2();
    let g = params.gravity();

    let delta = theta1 - theta2;
    let sin_delta = delta.sin();
    let cos_delta = delta.cos();
    let (denom1, denom2) = denominators(state, params);

    // Arm 1
    let gravity_term = -g * (2.0 * m1 + m2) * theta1.sin();
    let coupling_term = -m2 * g * (theta1 - 2.0 * theta2).sin();
    let centripetal_term = -2.0
        * sin_delta
        * m2
        * (omega2 * omega2 * l2 + omega1 * omega1 * l1 * cos_delta);
    let alpha1 = (gravity_term + coupling_term + centripetal_term) / denom1;

    // Arm 2
    let alpha2 = (2.0
        * sin_delta
        * (omega1 * omega1 * l1 * (m1 + m2)
            + g * (m1 + m2) * theta1.cos()
            + omega2 * omega2 * l2 * m2 * cos_delta))
        / denom2;

    (alpha1, alpha2)
}

/// Advances a [`PendulumState`] one tick at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Integrator {
    scheme: IntegrationScheme,
}

impl Integrator {
    pub fn new(scheme: IntegrationScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> IntegrationScheme {
        self.scheme
    }

    /// Advance `state` by one tick.
    ///
    /// Accelerations always come from the pre-update state. With the default
    /// scheme the order is: velocity += acceleration, velocity *= damping,
    /// angle += velocity. Reordering changes the trajectory.
    ///
    /// Velocities are clamped to [`MAX_ANGULAR_VELOCITY`] before they move the
    /// angles, so a finite state with in-range parameters always steps to a
    /// finite state. NaN is passed through untouched.
    pub fn step(&self, state: &mut PendulumState, params: &PendulumParams) {
        let (alpha1, alpha2) = angular_accelerations(state, params);
        let damping = params.damping();

        match self.scheme {
            IntegrationScheme::SemiImplicitEuler => {
                state.omega1 += alpha1;
                state.omega2 += alpha2;

                state.omega1 *= damping;
                state.omega2 *= damping;

                state.omega1 = bound_speed(state.omega1);
                state.omega2 = bound_speed(state.omega2);

                state.theta1 += state.omega1;
                state.theta2 += state.omega2;
            }
            IntegrationScheme::ExplicitEuler => {
                state.theta1 += state.omega1;
                state.theta2 += state.omega2;

                state.omega1 = bound_speed((state.omega1 + alpha1) * damping);
                state.omega2 = bound_speed((state.omega2 + alpha2) * damping);
            }
        }
    }

    /// Copying variant of [`Integrator::step`].
    pub fn stepped(&self, mut state: PendulumState, params: &PendulumParams) -> PendulumState {
        self.step(&mut state, params);
        state
    }
}

fn bound_speed(omega: f64) -> f64 {
    omega.clamp(-MAX_ANGULAR_VELOCITY, MAX_ANGULAR_VELOCITY)
}
