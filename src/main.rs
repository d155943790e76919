//! Shape Sandbox
//!
//! Spawn circles, rectangles and triangles with the mouse and watch them fall.

use winit::{
    application::ApplicationHandler,
    event::{KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use sandbox_core::{serializer, ImportFile, ImportLoader, SimulationHost};
use sandbox_input::SpawnController;
use shape_sandbox::config::AppConfig;
use shape_sandbox::input::{InputAction, InputMapper};
use shape_sandbox::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    /// The single simulation instance
    host: SimulationHost,
    spawner: SpawnController,
    simulation: SimulationSystem,
    loader: ImportLoader,
    /// Last user-visible event, shown in the title
    status: Option<String>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let host = SimulationHost::new(config.host_config());
        let spawner = SpawnController::new(config.spawn.to_controls())
            .with_size_step(config.spawn.size_step)
            .with_mass_step(config.spawn.mass_step);

        Self {
            config,
            window: None,
            render: None,
            host,
            spawner,
            simulation: SimulationSystem::new(),
            loader: ImportLoader::new(),
            status: None,
        }
    }

    fn refresh_title(&self) {
        if let Some(window) = &self.window {
            window.update_title(
                &self.spawner.controls.summary(),
                self.host.registry().len(),
                self.status.as_deref(),
            );
        }
    }

    fn set_status(&mut self, message: String) {
        self.status = Some(message);
        self.refresh_title();
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.simulation.stop();
        event_loop.exit();
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => {
                log::info!("Exiting");
                self.shutdown(event_loop);
            }
            InputAction::Export => self.export(),
            InputAction::ImportLatest => self.import_latest(),
            InputAction::Clear => {
                self.host.clear();
                self.set_status("Cleared".to_string());
            }
        }
    }

    fn export(&mut self) {
        let dir = &self.config.io.export_dir;
        match serializer::export_to_dir(self.host.registry(), dir) {
            Ok(path) => {
                log::info!(
                    "Exported {} bodies to {}",
                    self.host.registry().len(),
                    path.display()
                );
                self.set_status(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                log::error!("Export failed: {}", e);
                self.set_status("Export failed".to_string());
            }
        }
    }

    fn import_latest(&mut self) {
        match serializer::latest_export(&self.config.io.export_dir) {
            Ok(Some(path)) => {
                log::info!("Importing {}", path.display());
                self.loader.read_async(path);
            }
            Ok(None) => {
                log::warn!(
                    "No exports found in {}",
                    self.config.io.export_dir.display()
                );
                self.set_status("Nothing to import".to_string());
            }
            Err(e) => log::error!("Failed to list exports: {}", e),
        }
    }

    /// Apply files read by the loader since the last frame
    fn apply_imports(&mut self) {
        for ImportFile { path, result } in self.loader.poll_all() {
            let outcome = result
                .and_then(|text| serializer::import_str(self.host.registry_mut(), &text));
            match outcome {
                Ok(report) => {
                    log::info!(
                        "Imported {} bodies from {} ({} duplicates, {} unknown skipped)",
                        report.imported,
                        path.display(),
                        report.skipped_duplicates,
                        report.skipped_unknown
                    );
                    self.set_status(format!("Imported {} bodies", report.imported));
                }
                Err(e) => {
                    log::error!("Import of {} failed: {}", path.display(), e);
                    self.set_status("Import failed".to_string());
                }
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.apply_imports();

        let before = self.host.registry().len();
        if self.simulation.tick(&mut self.host).is_none() {
            return;
        }
        if self.host.registry().len() != before {
            self.refresh_title();
        }

        let Some(render) = &mut self.render else {
            return;
        };
        match render.render_frame(&self.host) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => render.recover_surface(),
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory");
                self.shutdown(event_loop);
                return;
            }
            Err(e) => log::warn!("{}", e),
        }

        // Request next frame
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                self.shutdown(event_loop);
                return;
            }
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            &self.config.rendering,
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => {
                log::error!("{}", e);
                self.shutdown(event_loop);
                return;
            }
        };

        // The window may not match the requested size (scaling, tiling WMs)
        let (width, height) = render.size();
        self.host.resize(width as f32, height as f32);

        self.window = Some(window);
        self.render = Some(render);
        self.refresh_title();
        log::info!("Right click to spawn, hold left button and drag to spawn continuously");
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.host.resize(size.width as f32, size.height as f32);
                }
                if let Some(render) = &mut self.render {
                    render.resize(size.width, size.height);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if self
                    .spawner
                    .process_cursor_moved(position.x, position.y, &mut self.host)
                    .is_some()
                {
                    self.refresh_title();
                }
            }

            WindowEvent::CursorLeft { .. } => self.spawner.process_cursor_left(),

            WindowEvent::MouseInput { state, button, .. } => {
                if self
                    .spawner
                    .process_mouse_button(button, state, &mut self.host)
                    .is_some()
                {
                    self.refresh_title();
                }
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state,
                        ..
                    },
                ..
            } => {
                if self.spawner.process_keyboard(key, state) {
                    self.refresh_title();
                } else if let Some(action) = InputMapper::map_keyboard(key, state) {
                    self.handle_action(action, event_loop);
                }
            }

            WindowEvent::DroppedFile(path) => {
                log::info!("Importing dropped file {}", path.display());
                self.loader.read_async(path);
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|config| config.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting Shape Sandbox");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}
