use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use wavefield::cli::Cli;
use wavefield::config::RenderConfig;
use wavefield::input::PointerTracker;
use wavefield::renderer::Renderer;

// === Constants ===

const FPS_UPDATE_INTERVAL: f32 = 1.0;

// === Application ===

struct App {
    config: RenderConfig,
    initial_size: (u32, u32),
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    input: PointerTracker,
    last_frame_time: Instant,
    frame_count: u32,
    fps_update_timer: f32,
}

impl App {
    fn new(config: RenderConfig, initial_size: (u32, u32)) -> Self {
        Self {
            config,
            initial_size,
            window: None,
            renderer: None,
            input: PointerTracker::new(initial_size.0, initial_size.1),
            last_frame_time: Instant::now(),
            frame_count: 0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            let fps = self.frame_count as f32 / self.fps_update_timer;
            log::debug!("FPS: {:.1}", fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Wavefield")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.initial_size.0,
                    self.initial_size.1,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                eprintln!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.input.set_viewport(size.width, size.height);

        // No GPU means no animated surface; the window itself stays up and
        // the app keeps running inert.
        match Renderer::new(window.clone(), self.config) {
            Ok(mut renderer) => {
                renderer.start();
                self.renderer = Some(renderer);
            }
            Err(e) => {
                log::warn!("animated surface unavailable: {}", e);
            }
        }

        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.input.process_event(&event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    renderer.resize((size.width, size.height), window.scale_factor());
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    let size = window.inner_size();
                    renderer.resize((size.width, size.height), scale_factor);
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_time).as_secs_f32();
                self.last_frame_time = now;
                self.update_fps(delta);

                if let Some(renderer) = &mut self.renderer {
                    let snapshot = self.input.snapshot();
                    if let Err(e) = renderer.tick(&snapshot) {
                        log::error!("render error: {}", e);
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, (cli.width, cli.height));

    println!("Wavefield - move the pointer to drift the camera, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
