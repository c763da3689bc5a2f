//! Double Pendulum Simulation
//!
//! Two rigid arms swinging in series under gravity, advanced one tick per
//! rendered frame and drawn with wgpu.

use pendulum_renderer::{Frame, PendulumRenderer, ScreenUniform};
use pendulum_simulation::{PendulumSimulation, SimulationConfig, SimulationError, SubstepTicks};
use rand::rngs::ThreadRng;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

const WINDOW_SIZE: u32 = 900;
/// Frames averaged for the FPS readout
const FRAME_TIME_WINDOW: usize = 60;

#[derive(Debug, Error)]
enum AppError {
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    renderer: PendulumRenderer,
    frame: Frame,

    simulation: PendulumSimulation,
    sim_config: SimulationConfig,
    ticks: SubstepTicks,
    rng: ThreadRng,
    paused: bool,

    frame_times: VecDeque<f32>,
    last_frame_time: Instant,
}

impl GpuState {
    async fn new(window: Arc<Window>) -> Result<Self, AppError> {
        let size = window.inner_size();

        // Create wgpu instance
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        // Request adapter
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("✓ Using GPU: {}", adapter.get_info().name);

        // Create device and queue
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        // Configure surface
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        // Vsync: one physics tick per displayed frame
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = PendulumRenderer::new(&device, config.format);
        log::info!("✓ Renderer initialized");

        let sim_config = SimulationConfig {
            canvas_size: (config.width as f32, config.height as f32),
            ..SimulationConfig::default()
        };
        let mut rng = rand::rng();
        let simulation = PendulumSimulation::randomized(&mut rng, &sim_config)?;
        log::info!("✓ Simulation initialized");

        Ok(Self {
            surface,
            device,
            queue,
            ticks: SubstepTicks::new(sim_config.ticks_per_frame),
            config,
            renderer,
            frame: Frame::default(),
            simulation,
            sim_config,
            rng,
            paused: false,
            frame_times: VecDeque::with_capacity(FRAME_TIME_WINDOW),
            last_frame_time: Instant::now(),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }

        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);

        self.sim_config.canvas_size = (new_size.width as f32, new_size.height as f32);
        if let Err(e) = self
            .simulation
            .set_canvas_size(new_size.width as f32, new_size.height as f32)
        {
            log::warn!("Ignoring resize: {e}");
        }
    }

    /// Start a fresh run with new random geometry and the current preset.
    fn restart(&mut self) {
        match PendulumSimulation::randomized(&mut self.rng, &self.sim_config) {
            Ok(simulation) => self.simulation = simulation,
            Err(e) => log::error!("Failed to restart simulation: {e}"),
        }
    }

    fn handle_key(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Space => {
                self.paused = !self.paused;
                log::info!("Simulation {}", if self.paused { "paused" } else { "resumed" });
            }
            KeyCode::KeyR => self.restart(),
            KeyCode::KeyP => {
                self.sim_config.preset = self.sim_config.preset.next();
                self.restart();
            }
            KeyCode::ArrowUp => {
                self.ticks.faster();
                log::debug!("Ticks per frame: {}", self.ticks.per_frame());
            }
            KeyCode::ArrowDown => {
                self.ticks.slower();
                log::debug!("Ticks per frame: {}", self.ticks.per_frame());
            }
            _ => {}
        }
    }

    fn render(&mut self) -> Result<(f32, f32), wgpu::SurfaceError> {
        // Frame timing
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > FRAME_TIME_WINDOW {
            self.frame_times.pop_front();
        }
        let avg_frame_time = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        let fps = if avg_frame_time > 0.0 {
            1.0 / avg_frame_time
        } else {
            0.0
        };

        // Physics
        if !self.paused {
            self.simulation.run(&mut self.ticks);
        }

        self.frame.clear();
        self.simulation.draw(&mut self.frame);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.render(
            &self.device,
            &self.queue,
            &view,
            ScreenUniform::new(self.config.width, self.config.height),
            &self.frame,
        );

        output.present();
        Ok((fps, avg_frame_time * 1000.0))
    }

    fn title(&self, fps: f32, frame_time: f32) -> String {
        format!(
            "Double Pendulum - {} - {:.0} FPS ({:.2}ms) - {} ticks/frame - E={:.0}{}",
            self.sim_config.preset.name(),
            fps,
            frame_time,
            self.ticks.per_frame(),
            self.simulation.energy().total(),
            if self.paused { " - paused" } else { "" }
        )
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
}

impl App {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window_attributes = Window::default_attributes()
            .with_title("Double Pendulum")
            .with_inner_size(winit::dpi::PhysicalSize::new(WINDOW_SIZE, WINDOW_SIZE));

        let window = Arc::new(event_loop.create_window(window_attributes)?);
        self.window = Some(window.clone());
        self.gpu_state = Some(pollster::block_on(GpuState::new(window))?);
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                log::error!("Startup failed: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),

            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.handle_key(key_code);
                }
            }

            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(gpu_state)) = (&self.window, &mut self.gpu_state) {
                    match gpu_state.render() {
                        Ok((fps, frame_time)) => {
                            window.set_title(&gpu_state.title(fps, frame_time));
                        }
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu_state.resize(window.inner_size())
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => log::warn!("Render error: {e:?}"),
                    }
                }
            }

            _ => {}
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<(), AppError> {
    // Initialize logger (RUST_LOG=debug for energy diagnostics)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting double pendulum simulation...");
    log::info!("Controls: Space pause, R restart, P next preset, Up/Down ticks per frame, Esc quit");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        window: None,
        gpu_state: None,
    };

    event_loop.run_app(&mut app)?;
    Ok(())
}
