//! Shark Game entry point
//!
//! Opens the window, loads sprites and runs the fixed-timestep game loop,
//! redrawing at most 60 times a second.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use shark_game::consts::*;
use shark_game::audio::AudioManager;
use shark_game::platform::pacing::next_frame_deadline;
use shark_game::platform::{FixedStepper, InputState};
use shark_game::renderer::{RenderState, SceneOptions, VertexBatch, draw_frame};
use shark_game::sim::{GameEvent, GameState, tick};
use shark_game::{Settings, SpriteAtlas};

/// Rolling frame-rate estimate over the last 60 frames
struct FpsCounter {
    frame_times: [Option<Instant>; 60],
    frame_index: usize,
    fps: f32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            frame_times: [None; 60],
            frame_index: 0,
            fps: 0.0,
        }
    }

    fn record(&mut self, now: Instant) {
        // Slot about to be overwritten holds the oldest sample
        if let Some(oldest) = self.frame_times[self.frame_index] {
            let elapsed = now.duration_since(oldest).as_secs_f32();
            if elapsed > 0.0 {
                self.fps = self.frame_times.len() as f32 / elapsed;
            }
        }
        self.frame_times[self.frame_index] = Some(now);
        self.frame_index = (self.frame_index + 1) % self.frame_times.len();
    }
}

/// Simulation plus the input that drives it
struct Game {
    state: GameState,
    input: InputState,
    stepper: FixedStepper,
    audio: AudioManager,
    last_frame: Option<Instant>,
    fps: FpsCounter,
}

impl Game {
    fn new(seed: u64, scale: f32, audio: AudioManager) -> Self {
        Self {
            state: GameState::new(seed),
            input: InputState::new(scale),
            stepper: FixedStepper::new(),
            audio,
            last_frame: None,
            fps: FpsCounter::new(),
        }
    }

    /// Run simulation ticks; returns true once the player chose to quit
    fn update(&mut self, now: Instant) -> bool {
        let frame_dt = self
            .last_frame
            .map_or(SIM_DT, |last| now.duration_since(last).as_secs_f32());
        self.last_frame = Some(now);
        self.fps.record(now);

        let plan = self.stepper.plan(frame_dt);
        let mut quit = false;
        for _ in 0..plan.steps {
            let input = self.input.tick_input();
            let events = tick(&mut self.state, &input, plan.dt);

            // Clear one-shot inputs after processing
            self.input.clear_one_shots();

            self.audio.play_events(&events);
            quit |= events.contains(&GameEvent::QuitRequested);
        }

        quit
    }
}

/// Window, GPU and game, created once the event loop is running
struct Running {
    window: Arc<Window>,
    render_state: RenderState,
    batch: VertexBatch,
    game: Game,
}

struct App {
    settings: Settings,
    atlas: SpriteAtlas,
    running: Option<Running>,
    /// Fatal error raised inside the event loop
    error: Option<anyhow::Error>,
}

impl App {
    fn new(settings: Settings, atlas: SpriteAtlas) -> Self {
        Self {
            settings,
            atlas,
            running: None,
            error: None,
        }
    }

    fn init(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<Running> {
        let scale = self.settings.effective_scale();
        let attrs = Window::default_attributes()
            .with_title("Shark Game")
            .with_inner_size(LogicalSize::new(WIDTH as f32 * scale, HEIGHT as f32 * scale))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let render_state = pollster::block_on(RenderState::new(
            window.clone(),
            &self.atlas,
            self.settings.vsync,
        ))
        .context("failed to initialize GPU renderer")?;

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64);
        log::info!("Game initialized with seed: {}", seed);

        let audio = AudioManager::new(self.settings.sound_effects, self.settings.effective_volume());
        let game = Game::new(seed, viewport_scale(&window), audio);

        Ok(Running {
            window,
            render_state,
            batch: VertexBatch::new(self.atlas.layout.clone()),
            game,
        })
    }

    fn scene_options(&self, fps: f32) -> SceneOptions {
        SceneOptions {
            show_joystick: self.settings.show_joystick,
            flash_effects: self.settings.effective_flash(),
            fps: self.settings.show_fps.then_some(fps),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        self.error = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let options = match &self.running {
            Some(running) => self.scene_options(running.game.fps.fps),
            None => return,
        };
        let Some(running) = self.running.as_mut() else {
            return;
        };

        if running.game.update(Instant::now()) {
            log::info!("Goodbye");
            event_loop.exit();
            return;
        }

        running.batch.begin();
        draw_frame(
            &mut running.batch,
            &running.game.state,
            &running.game.input.joystick,
            &options,
        );

        match running.render_state.render(&running.batch) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = running.window.inner_size();
                running.render_state.resize(size.width, size.height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, anyhow::anyhow!("GPU out of memory"));
                return;
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

/// Physical pixels per viewport pixel for the window's current size
fn viewport_scale(window: &Window) -> f32 {
    window.inner_size().width as f32 / WIDTH as f32
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }
        match self.init(event_loop) {
            Ok(running) => {
                running.window.request_redraw();
                self.running = Some(running);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    /// Redraw at most once per frame interval, sleeping until the next one is due
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(running) = self.running.as_ref() else {
            return;
        };
        let now = Instant::now();
        let deadline = next_frame_deadline(running.game.last_frame, now);
        if now >= deadline {
            running.window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::RedrawRequested = event {
            self.redraw(event_loop);
            return;
        }
        let Some(running) = self.running.as_mut() else {
            return;
        };
        let input = &mut running.game.input;

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                running.render_state.resize(size.width, size.height);
                input.set_scale(size.width as f32 / WIDTH as f32);
            }
            WindowEvent::Focused(false) => input.release_all(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    input.key(code, event.state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => input.cursor_moved(position),
            WindowEvent::MouseInput { state, button, .. } => input.mouse_button(button, state),
            WindowEvent::Touch(touch) => input.touch(touch.id, touch.phase, touch.location),
            _ => {}
        }
    }
}

fn run() -> anyhow::Result<()> {
    let settings = Settings::load();
    let atlas = SpriteAtlas::load(&settings.assets_dir).context("failed to load sprites")?;

    let event_loop = EventLoop::new().context("failed to create event loop")?;

    let mut app = App::new(settings, atlas);
    event_loop.run_app(&mut app).context("event loop failed")?;

    match app.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Shark Game starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
