//! # Double Pendulum Simulation
//!
//! Frame-driven simulation driver plus the capabilities it is wired to:
//! randomness, tick cadence and a rendering surface.

pub mod config;
pub mod error;
pub mod random;
pub mod simulation;
pub mod surface;
pub mod tick;

pub use config::*;
pub use error::*;
pub use random::*;
pub use simulation::*;
pub use surface::*;
pub use tick::*;
