//! Physical constants for the double pendulum
//!
//! Values are in simulation units: one time unit is one tick, lengths are
//! pixels, so "gravity" is really pixels per tick² scaled for legible motion.

use std::f64::consts::{FRAC_PI_2, PI};

/// Canonical gravitational acceleration
pub const GRAVITY: f64 = 0.981;

/// Gravity of the slow-motion preset
/// Gives the pendulum a "slow motion" appearance
pub const SLOW_MOTION_GRAVITY: f64 = 0.64;

/// Per-tick angular velocity multiplier
/// Crudely models friction and air resistance, keeps the motion bounded
pub const DAMPING: f64 = 0.9999;

/// No damping at all
pub const NO_DAMPING: f64 = 1.0;

/// Shortest arm produced by randomized initialization
pub const ARM_LENGTH_MIN: f64 = 100.0;

/// Longest arm produced by randomized initialization
pub const ARM_LENGTH_MAX: f64 = 200.0;

/// Lightest pendant produced by randomized initialization
pub const MASS_MIN: f64 = 10.0;

/// Heaviest pendant produced by randomized initialization
pub const MASS_MAX: f64 = 50.0;

/// Lower bound of randomized initial angles (upper half of the circle)
pub const INITIAL_ANGLE_MIN: f64 = FRAC_PI_2;

/// Upper bound of randomized initial angles
pub const INITIAL_ANGLE_MAX: f64 = 3.0 * PI / 2.0;

/// Largest angular speed either arm may reach, in radians per tick
///
/// The integrator clamps both velocities to this after every update. Above it
/// a one-tick step no longer follows the motion and the state overflows.
pub const MAX_ANGULAR_VELOCITY: f64 = 1.0;
