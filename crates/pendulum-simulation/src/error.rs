use pendulum_physics::ParamsError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("invalid pendulum parameters: {0}")]
    Params(#[from] ParamsError),

    /// Canvas dimensions must be finite and non-negative.
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },
}
