//! # Double Pendulum Physics
//!
//! State model, equations of motion and projection to screen space for two
//! rigid arms swinging in series under gravity.

pub mod constants;
pub mod energy;
pub mod error;
pub mod integrator;
pub mod params;
pub mod projector;
pub mod state;

pub use constants::*;
pub use energy::*;
pub use error::*;
pub use integrator::*;
pub use params::*;
pub use projector::*;
pub use state::*;
