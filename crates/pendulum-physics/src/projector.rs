//! Angular state to pixel coordinates

use glam::{DVec2, Vec2};

use crate::params::PendulumParams;
use crate::state::PendulumState;

/// Absolute positions of both pendants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendantPositions {
    pub p1: Vec2,
    pub p2: Vec2,
}

/// Pivot placement for a canvas of the given size: its center.
pub fn canvas_origin(width: f32, height: f32) -> Vec2 {
    Vec2::new(width * 0.5, height * 0.5)
}

/// Map angles to pendant positions relative to `origin`.
///
/// Screen y grows downward, so an angle of zero hangs straight below the pivot.
/// Arm offsets are computed in double precision and narrowed for the screen.
pub fn to_cartesian(state: &PendulumState, params: &PendulumParams, origin: Vec2) -> PendantPositions {
    let (sin1, cos1) = state.theta1.sin_cos();
    let (sin2, cos2) = state.theta2.sin_cos();

    let arm1 = (params.arm_length1() * DVec2::new(sin1, cos1)).as_vec2();
    let arm2 = (params.arm_length2() * DVec2::new(sin2, cos2)).as_vec2();

    PendantPositions {
        p1: origin + arm1,
        p2: origin + arm1 + arm2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn params() -> PendulumParams {
        PendulumParams::new(100.0, 150.0, 20.0, 30.0).unwrap()
    }

    #[test]
    fn test_hanging_straight_down() {
        let positions = to_cartesian(
            &PendulumState::at_rest(0.0, 0.0),
            &params(),
            Vec2::new(500.0, 500.0),
        );
        assert_eq!(positions.p1, Vec2::new(500.0, 600.0));
        assert_eq!(positions.p2, Vec2::new(500.0, 750.0));
    }

    #[test]
    fn test_quarter_turn() {
        let positions = to_cartesian(
            &PendulumState::at_rest(FRAC_PI_2, 0.0),
            &params(),
            Vec2::ZERO,
        );
        assert!((positions.p1.x - 100.0).abs() < 1e-5);
        assert!(positions.p1.y.abs() < 1e-5);
        assert!((positions.p2.x - 100.0).abs() < 1e-5);
        assert!((positions.p2.y - 150.0).abs() < 1e-5);
    }

    #[test]
    fn test_arm_lengths_are_preserved() {
        let origin = Vec2::new(450.0, 450.0);
        let positions = to_cartesian(&PendulumState::at_rest(2.3, -4.1), &params(), origin);
        assert!((positions.p1.distance(origin) - 100.0).abs() < 1e-3);
        assert!((positions.p2.distance(positions.p1) - 150.0).abs() < 1e-3);
    }

    #[test]
    fn test_canvas_origin_is_center() {
        assert_eq!(canvas_origin(900.0, 600.0), Vec2::new(450.0, 300.0));
    }
}
