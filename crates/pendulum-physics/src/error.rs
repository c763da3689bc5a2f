use thiserror::Error;

/// Rejected pendulum parameters.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParamsError {
    /// Arm lengths must be finite and strictly positive.
    #[error("arm {arm} length must be positive and finite, got {value}")]
    InvalidArmLength { arm: u8, value: f64 },

    /// Pendant masses must be finite and strictly positive.
    #[error("pendant {pendant} mass must be positive and finite, got {value}")]
    InvalidMass { pendant: u8, value: f64 },

    #[error("gravity must be finite, got {0}")]
    InvalidGravity(f64),

    /// Damping is a velocity multiplier in (0, 1].
    #[error("damping must be in (0, 1], got {0}")]
    InvalidDamping(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_field() {
        let msg = ParamsError::InvalidArmLength { arm: 2, value: -1.0 }.to_string();
        assert!(msg.contains("arm 2"));
        assert!(msg.contains("-1"));

        let msg = ParamsError::InvalidDamping(1.5).to_string();
        assert!(msg.contains("(0, 1]"));
    }
}
