//! # Pendulum Renderer
//!
//! wgpu rendering surface for the double pendulum: arms and pendants are
//! drawn as instanced, anti-aliased SDF capsules.

pub mod frame;
pub mod instance;
pub mod palette;
pub mod renderer;
pub mod screen;

pub use frame::*;
pub use instance::*;
pub use renderer::*;
pub use screen::*;
