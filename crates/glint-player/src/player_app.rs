//! Player application implementing winit ApplicationHandler
//!
//! Hosts the cursor trail in a window: pointer and resize events go to the
//! animator, redraws run its due frame and render the batch.

use crate::config::PlayerConfig;
use crate::window_host::WindowHost;
use glint_core::Viewport;
use glint_render::{OverlayCanvas, OverlayRenderer, RenderContext};
use glint_runtime::{dispatch_event, run_frame, FrameClock, HostEvent, OverlayComponent};
use glint_trail::{TrailAnimator, TrailRng};
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

/// Seconds between diagnostic log lines
const REPORT_INTERVAL: f64 = 2.0;

pub struct PlayerApp {
    pub config: PlayerConfig,
    pub fullscreen: bool,

    // Overlay
    trail: TrailAnimator<OverlayCanvas, TrailRng>,
    host: WindowHost,
    clock: FrameClock,
    next_report: f64,

    // Rendering
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    renderer: Option<OverlayRenderer>,
}

impl PlayerApp {
    pub fn new(config: PlayerConfig, seed: u32, fullscreen: bool) -> Self {
        let viewport = Viewport::new(config.window.width, config.window.height);
        let trail = TrailAnimator::new(config.trail.clone(), TrailRng::new(seed));
        Self {
            config,
            fullscreen,
            trail,
            host: WindowHost::new(viewport),
            clock: FrameClock::new(),
            next_report: REPORT_INTERVAL,
            window: None,
            render_context: None,
            renderer: None,
        }
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) {
        let window_config = &self.config.window;
        let window_attrs = Window::default_attributes()
            .with_title(window_config.title.clone())
            .with_inner_size(PhysicalSize::new(window_config.width, window_config.height))
            .with_transparent(window_config.transparent);

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        if self.fullscreen {
            window.set_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
        }

        self.window = Some(window.clone());

        // Without a GPU the window stays up and the trail stays inert
        match pollster::block_on(RenderContext::new(window.clone(), window_config.transparent)) {
            Ok(context) => {
                self.renderer = Some(OverlayRenderer::new(&context));
                self.render_context = Some(context);
            }
            Err(e) => log::error!("gpu unavailable: {e}"),
        }

        self.host.attach(window, self.render_context.is_some());

        if let Err(e) = self.trail.mount(&mut self.host) {
            log::error!("failed to mount cursor trail: {e}");
        }
    }

    fn shutdown(&mut self) {
        if self.trail.is_mounted() {
            self.trail.unmount(&mut self.host);
        }
    }

    fn redraw(&mut self) {
        if run_frame(&mut self.trail, &mut self.host) {
            self.clock.tick();
            if self.clock.total_time >= self.next_report {
                log::debug!(
                    "{:.1} fps, {} particles",
                    self.clock.fps(),
                    self.trail.particles().len()
                );
                self.next_report = self.clock.total_time + REPORT_INTERVAL;
            }
        }

        let (Some(context), Some(renderer)) = (&self.render_context, &self.renderer) else {
            return;
        };
        let backdrop = self.config.window.backdrop_color();
        if let Err(e) = renderer.render_frame(context, self.trail.canvas(), backdrop) {
            log::warn!("frame skipped: {e}");
        }
    }
}

impl ApplicationHandler for PlayerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            self.initialize(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(context) = &mut self.render_context {
                    context.resize(new_size);
                }
                let viewport = Viewport::new(new_size.width, new_size.height);
                // Minimised windows report zero size; keep the last surface
                if viewport.is_empty() {
                    return;
                }
                self.host.set_viewport(viewport);
                dispatch_event(&mut self.trail, &mut self.host, HostEvent::Resized(viewport));
            }

            // Observed, never consumed
            WindowEvent::CursorMoved { position, .. } => {
                dispatch_event(
                    &mut self.trail,
                    &mut self.host,
                    HostEvent::PointerMoved {
                        x: position.x,
                        y: position.y,
                    },
                );
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}
