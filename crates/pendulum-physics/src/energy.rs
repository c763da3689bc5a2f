//! Mechanical energy, for diagnostics only
//!
//! Damping drains energy on purpose, so nothing here feeds back into the
//! integration. Potential energy is measured with y pointing down from the
//! pivot, matching the projector.

use crate::params::PendulumParams;
use crate::state::PendulumState;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Energy {
    pub kinetic: f64,
    pub potential: f64,
}

impl Energy {
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }
}

pub fn energy(state: &PendulumState, params: &PendulumParams) -> Energy {
    let l1 = params.arm_length1();
    let l2 = params.arm_length2();
    let m1 = params.mass1();
    let m2 = params.mass2();
    let g = params.gravity();

    let kinetic = 0.5 * (m1 + m2) * l1 * l1 * state.omega1 * state.omega1
        + 0.5 * m2 * l2 * l2 * state.omega2 * state.omega2
        + m2 * l1 * l2 * state.omega1 * state.omega2 * (state.theta1 - state.theta2).cos();

    let potential =
        -(m1 + m2) * g * l1 * state.theta1.cos() - m2 * g * l2 * state.theta2.cos();

    Energy { kinetic, potential }
}
