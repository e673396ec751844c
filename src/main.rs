use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use serde::Serialize;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use scroll_room::camera::CameraPose;
use scroll_room::cli::{self, Cli};
use scroll_room::clock::{Clock, FpsCounter};
use scroll_room::config::SceneConfig;
use scroll_room::renderer::RoomRenderer;
use scroll_room::scroll::{key_scroll, wheel_scroll, ScrollInput};
use scroll_room::SceneContext;

struct App {
    config: SceneConfig,
    context: SceneContext,
    show_hud: bool,
    window: Option<Arc<Window>>,
    renderer: Option<RoomRenderer>,
    clock: Clock,
    fps: FpsCounter,
}

impl App {
    fn new(config: SceneConfig, context: SceneContext, show_hud: bool) -> Self {
        Self {
            config,
            context,
            show_hud,
            window: None,
            renderer: None,
            clock: Clock::new(),
            fps: FpsCounter::new(),
        }
    }

    fn viewport_height(&self) -> f32 {
        self.window
            .as_ref()
            .map(|w| w.inner_size().height as f32)
            .unwrap_or(self.config.window.height as f32)
    }

    fn apply_scroll(&mut self, input: ScrollInput) {
        match input {
            ScrollInput::By(pixels) => self.context.scroll_by(pixels),
            ScrollInput::ToStart => self.context.scroll_to(0.0),
            ScrollInput::ToEnd => {
                let end = self.context.scroll.trigger().max_offset();
                self.context.scroll_to(end);
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(width, height);
        }
    }

    fn redraw(&mut self) {
        let delta = self.clock.tick();
        self.fps.tick(delta);
        self.context.advance(delta);

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };
        match renderer.render(&self.context, window, self.fps.fps()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = window.inner_size();
                renderer.resize(size.width, size.height);
                self.context.resize(size.width, size.height);
            }
            Err(e) => error!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));
        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(RoomRenderer::new(window.clone(), &self.context.scene, self.show_hud)) {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.context.resize(size.width, size.height);
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.clock.reset();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

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
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => {
                if let Some(input) = key_scroll(key, self.viewport_height()) {
                    self.apply_scroll(input);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let pixels = wheel_scroll(delta, self.config.scroll.line_height);
                self.apply_scroll(ScrollInput::By(pixels));
            }
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

#[derive(Serialize)]
struct PoseSample {
    t: f32,
    #[serde(flatten)]
    pose: CameraPose,
}

/// Writes `divisions + 1` evenly spaced poses along the path as JSON lines.
fn sample_path(context: &SceneContext, divisions: usize) -> Result<()> {
    let divisions = divisions.max(1);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for i in 0..=divisions {
        let t = i as f32 / divisions as f32;
        let sample = PoseSample {
            t,
            pose: context.controller.on_progress_update(t),
        };
        writeln!(out, "{}", serde_json::to_string(&sample)?)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    cli::logger_builder(cli::LOG_FILTER_ENV).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    cli.apply(&mut config);

    let context = SceneContext::build(&config).context("Invalid scene configuration")?;

    if let Some(divisions) = cli.sample_path {
        return sample_path(&context, divisions);
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, context, !cli.no_ui);

    info!("Scroll Room - Controls: mouse wheel, PageUp/PageDown, arrows, Home/End, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
