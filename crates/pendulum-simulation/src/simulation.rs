//! Simulation driver
//!
//! Owns the single live pendulum state and advances it once per tick. The
//! driver is the only caller of the integrator and the projector; rendering
//! goes through a [`DrawSurface`], cadence through a [`TickSource`].

use glam::Vec2;
use pendulum_physics::{
    canvas_origin, energy, to_cartesian, Energy, Integrator, PendantPositions, PendulumParams,
    PendulumState, MAX_ANGULAR_VELOCITY,
};

use crate::config::{DivergencePolicy, SimulationConfig};
use crate::error::SimulationError;
use crate::random::{random_initial_conditions, RandomSource};
use crate::surface::DrawSurface;
use crate::tick::{TickControl, TickSource};

/// Ticks between energy diagnostics at debug level
const ENERGY_LOG_INTERVAL: u64 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced,
    /// The step produced NaN or infinite state; the divergence policy was applied
    Diverged,
}

pub struct PendulumSimulation {
    params: PendulumParams,
    state: PendulumState,
    integrator: Integrator,
    divergence: DivergencePolicy,
    origin: Vec2,
    tick_count: u64,
    reset_count: u32,
    diverged: bool,
    // Speed bound has been hit this run
    saturated: bool,
}

impl PendulumSimulation {
    /// A simulation with the default integrator and divergence policy.
    pub fn new(params: PendulumParams, state: PendulumState, origin: Vec2) -> Self {
        Self {
            params,
            state,
            integrator: Integrator::default(),
            divergence: DivergencePolicy::default(),
            origin,
            tick_count: 0,
            reset_count: 0,
            diverged: false,
            saturated: false,
        }
    }

    /// Draw parameters and starting angles from `rng`, configured by `config`.
    pub fn randomized<R: RandomSource + ?Sized>(
        rng: &mut R,
        config: &SimulationConfig,
    ) -> Result<Self, SimulationError> {
        let (params, state) = random_initial_conditions(rng, config.preset)?;
        let (width, height) = config.canvas_size;
        let origin = checked_origin(width, height)?;

        log::info!(
            "✓ Pendulum initialized ({}): arms=({:.1}, {:.1}) masses=({:.1}, {:.1}) angles=({:.3}, {:.3})",
            config.preset.name(),
            params.arm_length1(),
            params.arm_length2(),
            params.mass1(),
            params.mass2(),
            state.theta1,
            state.theta2
        );

        Ok(Self::new(params, state, origin)
            .with_integrator(Integrator::new(config.scheme))
            .with_divergence_policy(config.divergence))
    }

    pub fn with_integrator(mut self, integrator: Integrator) -> Self {
        self.integrator = integrator;
        self
    }

    pub fn with_divergence_policy(mut self, divergence: DivergencePolicy) -> Self {
        self.divergence = divergence;
        self
    }

    /// Advance the pendulum by one tick.
    pub fn step(&mut self) -> StepOutcome {
        self.integrator.step(&mut self.state, &self.params);
        self.tick_count += 1;

        if !self.state.is_finite() {
            return self.handle_divergence();
        }

        if !self.saturated
            && self.state.omega1.abs().max(self.state.omega2.abs()) >= MAX_ANGULAR_VELOCITY
        {
            log::warn!(
                "Angular velocity reached the {MAX_ANGULAR_VELOCITY} rad/tick bound at tick {}",
                self.tick_count
            );
            self.saturated = true;
        }

        if self.tick_count % ENERGY_LOG_INTERVAL == 0 {
            let energy = self.energy();
            log::debug!(
                "tick {}: kinetic={:.1} potential={:.1} total={:.1}",
                self.tick_count,
                energy.kinetic,
                energy.potential,
                energy.total()
            );
        }

        StepOutcome::Advanced
    }

    fn handle_divergence(&mut self) -> StepOutcome {
        match self.divergence {
            DivergencePolicy::Reset => {
                log::warn!(
                    "Pendulum state diverged at tick {} ({:?}), resetting to rest",
                    self.tick_count,
                    self.state
                );
                self.state = PendulumState::default();
                self.reset_count += 1;
            }
            DivergencePolicy::Propagate => {
                if !self.diverged {
                    log::warn!(
                        "Pendulum state diverged at tick {} ({:?})",
                        self.tick_count,
                        self.state
                    );
                }
                self.diverged = true;
            }
        }
        StepOutcome::Diverged
    }

    /// Issue the arm and pendant draw commands for the current state.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let PendantPositions { p1, p2 } = self.positions();

        surface.draw_line(self.origin, p1);
        surface.draw_circle(p1, self.params.mass1() as f32);

        surface.draw_line(p1, p2);
        surface.draw_circle(p2, self.params.mass2() as f32);
    }

    /// One step followed by drawing the new state.
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> StepOutcome {
        let outcome = self.step();
        self.draw(surface);
        outcome
    }

    /// Step once per tick delivered by `ticks`. Returns how many steps diverged.
    pub fn run<T: TickSource + ?Sized>(&mut self, ticks: &mut T) -> u32 {
        let mut diverged = 0;
        ticks.run(&mut |_| {
            if self.step() == StepOutcome::Diverged {
                diverged += 1;
            }
            TickControl::Continue
        });
        diverged
    }

    /// Move the pivot to the center of a resized canvas.
    pub fn set_canvas_size(&mut self, width: f32, height: f32) -> Result<(), SimulationError> {
        self.origin = checked_origin(width, height)?;
        Ok(())
    }

    pub fn positions(&self) -> PendantPositions {
        to_cartesian(&self.state, &self.params, self.origin)
    }

    pub fn energy(&self) -> Energy {
        energy(&self.state, &self.params)
    }

    pub fn params(&self) -> &PendulumParams {
        &self.params
    }

    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn integrator(&self) -> Integrator {
        self.integrator
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// How often the divergence policy put the pendulum back at rest.
    pub fn reset_count(&self) -> u32 {
        self.reset_count
    }
}

fn checked_origin(width: f32, height: f32) -> Result<Vec2, SimulationError> {
    if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
        return Err(SimulationError::InvalidCanvas { width, height });
    }
    Ok(canvas_origin(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedFraction;
    use crate::surface::{DrawCommand, DrawList};
    use crate::tick::FixedTicks;
    use pendulum_physics::{IntegrationScheme, Preset};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn hanging() -> PendulumSimulation {
        let params = PendulumParams::new(100.0, 150.0, 20.0, 30.0).unwrap();
        PendulumSimulation::new(
            params,
            PendulumState::at_rest(0.0, 0.0),
            Vec2::new(500.0, 500.0),
        )
    }

    /// Gravity large enough that the accelerations overflow on the first step.
    fn exploding(policy: DivergencePolicy) -> PendulumSimulation {
        let params = PendulumParams::new(100.0, 150.0, 20.0, 30.0)
            .unwrap()
            .with_gravity(f64::MAX)
            .unwrap();
        PendulumSimulation::new(params, PendulumState::at_rest(1.0, 2.0), Vec2::ZERO)
            .with_divergence_policy(policy)
    }

    #[test]
    fn test_draw_order() {
        let mut list = DrawList::new();
        hanging().draw(&mut list);

        let origin = Vec2::new(500.0, 500.0);
        let p1 = Vec2::new(500.0, 600.0);
        let p2 = Vec2::new(500.0, 750.0);
        assert_eq!(
            list.commands,
            vec![
                DrawCommand::Line { from: origin, to: p1 },
                DrawCommand::Circle {
                    center: p1,
                    diameter: 20.0
                },
                DrawCommand::Line { from: p1, to: p2 },
                DrawCommand::Circle {
                    center: p2,
                    diameter: 30.0
                },
            ]
        );
    }

    #[test]
    fn test_tick_steps_then_draws() {
        let mut simulation = hanging();
        let mut list = DrawList::new();
        assert_eq!(simulation.tick(&mut list), StepOutcome::Advanced);
        assert_eq!(simulation.tick_count(), 1);
        assert_eq!(list.commands.len(), 4);
        assert_eq!(*simulation.state(), PendulumState::at_rest(0.0, 0.0));
    }

    #[test]
    fn test_reset_recovers_after_divergence() {
        let params = PendulumParams::new(100.0, 150.0, 20.0, 30.0).unwrap();
        let start = PendulumState::at_rest(f64::INFINITY, 2.0);
        let mut simulation = PendulumSimulation::new(params, start, Vec2::ZERO)
            .with_divergence_policy(DivergencePolicy::Reset);

        assert_eq!(simulation.step(), StepOutcome::Diverged);
        assert_eq!(*simulation.state(), PendulumState::default());
        assert_eq!(simulation.reset_count(), 1);

        let diverged = simulation.run(&mut FixedTicks::new(1000));
        assert_eq!(diverged, 0);
        assert_eq!(simulation.reset_count(), 1);
        assert_eq!(*simulation.state(), PendulumState::default());
        assert_eq!(simulation.tick_count(), 1001);
    }

    #[test]
    fn test_divergence_can_propagate() {
        let mut simulation = exploding(DivergencePolicy::Propagate);
        assert_eq!(simulation.step(), StepOutcome::Diverged);
        assert!(!simulation.state().is_finite());
        assert_eq!(simulation.reset_count(), 0);
    }

    #[test]
    fn test_randomized_runs_stay_finite() {
        for preset in Preset::ALL {
            for scheme in [IntegrationScheme::SemiImplicitEuler, IntegrationScheme::ExplicitEuler] {
                let config = SimulationConfig {
                    preset,
                    scheme,
                    ..SimulationConfig::default()
                };
                for seed in 0..16 {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let mut simulation = PendulumSimulation::randomized(&mut rng, &config).unwrap();
                    for _ in 0..10_000 {
                        assert_eq!(
                            simulation.step(),
                            StepOutcome::Advanced,
                            "{preset:?} {scheme:?} seed {seed} tick {}",
                            simulation.tick_count()
                        );
                        assert!(simulation.state().is_finite());
                    }
                    assert_eq!(simulation.reset_count(), 0);
                    assert_eq!(simulation.tick_count(), 10_000);
                }
            }
        }
    }

    #[test]
    fn test_randomized_applies_config() {
        let config = SimulationConfig {
            preset: Preset::Frictionless,
            scheme: IntegrationScheme::ExplicitEuler,
            canvas_size: (800.0, 600.0),
            ..SimulationConfig::default()
        };
        let simulation = PendulumSimulation::randomized(&mut FixedFraction(0.5), &config).unwrap();
        assert_eq!(simulation.params().damping(), 1.0);
        assert_eq!(simulation.integrator().scheme(), IntegrationScheme::ExplicitEuler);
        assert_eq!(simulation.origin(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_identical_runs_match() {
        let config = SimulationConfig {
            preset: Preset::Frictionless,
            ..SimulationConfig::default()
        };
        let mut a = PendulumSimulation::randomized(&mut StdRng::seed_from_u64(3), &config).unwrap();
        let mut b = PendulumSimulation::randomized(&mut StdRng::seed_from_u64(3), &config).unwrap();
        a.run(&mut FixedTicks::new(2000));
        b.run(&mut FixedTicks::new(2000));
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_resize_moves_pivot() {
        let mut simulation = hanging();
        simulation.set_canvas_size(1200.0, 800.0).unwrap();
        assert_eq!(simulation.origin(), Vec2::new(600.0, 400.0));
        assert_eq!(simulation.positions().p1, Vec2::new(600.0, 500.0));

        assert!(matches!(
            simulation.set_canvas_size(f32::NAN, 10.0),
            Err(SimulationError::InvalidCanvas { .. })
        ));
        assert_eq!(simulation.origin(), Vec2::new(600.0, 400.0));
    }
}
