//! Runtime configuration of a simulation run

use pendulum_physics::{IntegrationScheme, Preset};

/// What to do when a step produces NaN or infinite state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DivergencePolicy {
    /// Log a warning and put the pendulum at rest, hanging straight down
    #[default]
    Reset,
    /// Log a warning and keep integrating the non-finite state
    Propagate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub preset: Preset,
    pub scheme: IntegrationScheme,
    pub divergence: DivergencePolicy,
    /// Canvas (width, height) in pixels; the pivot sits at its center
    pub canvas_size: (f32, f32),
    /// Physics ticks per rendered frame
    pub ticks_per_frame: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            preset: Preset::Standard,
            scheme: IntegrationScheme::SemiImplicitEuler,
            divergence: DivergencePolicy::Reset,
            canvas_size: (900.0, 900.0),
            ticks_per_frame: 1,
        }
    }
}
