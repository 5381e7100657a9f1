use std::sync::Arc;
use std::time::Duration;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::SceneConfig;
use crate::core::{Clock, Driver};
use crate::renderer::MeshRenderer;
use crate::scene::RngSource;

pub const WINDOW_TITLE: &str = "Stress Scene";

/// winit application: owns the window, the renderer and the frame driver
pub struct App {
    config: SceneConfig,
    window: Option<Arc<Window>>,
    renderer: Option<MeshRenderer>,
    driver: Driver<RngSource>,
    clock: Clock,
}

impl App {
    pub fn new(config: SceneConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };
        let driver = Driver::new(config.controls(), config.viewport(), rng);

        Self {
            config,
            window: None,
            renderer: None,
            driver,
            clock: Clock::new(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        if !self.driver.viewport().is_drawable() {
            return;
        }

        if let Err(e) = self.driver.frame(self.clock.elapsed(), renderer) {
            log::error!("Render error: {:#}", e);
            event_loop.exit();
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
                .with_title(WINDOW_TITLE)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.width,
                    self.config.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(MeshRenderer::new(
            window.clone(),
            self.driver.state().complexity,
            self.config.show_ui,
        )) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window.clone());
        let renderer = self.renderer.insert(renderer);

        // logical size from config may differ from the physical surface
        let size = window.inner_size();
        self.driver.resize(size.width, size.height, renderer);

        self.clock.reset();
        self.driver.start(Duration::ZERO);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(renderer) = self.renderer.as_mut() {
            if renderer.handle_event(&event) {
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
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    self.driver.resize(size.width, size.height, renderer);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
