//! `Host` implementation over a winit window

use glint_core::{GlintError, Result, Viewport};
use glint_render::OverlayCanvas;
use glint_runtime::{EventKind, FrameHandle, FrameQueue, Host, ListenerId, ListenerRegistry};
use std::sync::Arc;
use winit::window::Window;

/// Hosts an overlay component in a window.
///
/// Frame requests become redraw requests; the app runs the due frame when
/// winit delivers `RedrawRequested`. Canvas creation fails until a GPU
/// surface has been attached.
pub struct WindowHost {
    window: Option<Arc<Window>>,
    surface_ready: bool,
    viewport: Viewport,
    listeners: ListenerRegistry,
    frames: FrameQueue,
}

impl WindowHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            window: None,
            surface_ready: false,
            viewport,
            listeners: ListenerRegistry::new(),
            frames: FrameQueue::new(),
        }
    }

    /// Bind to a created window. `surface_ready` is false when the GPU
    /// context could not be set up.
    pub fn attach(&mut self, window: Arc<Window>, surface_ready: bool) {
        let size = window.inner_size();
        self.viewport = Viewport::new(size.width, size.height);
        self.window = Some(window);
        self.surface_ready = surface_ready;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frames.pending()
    }
}

impl Host for WindowHost {
    type Canvas = OverlayCanvas;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn create_canvas(&mut self, viewport: Viewport) -> Result<OverlayCanvas> {
        if !self.surface_ready {
            return Err(GlintError::SurfaceUnavailable(
                "window has no gpu surface".into(),
            ));
        }
        Ok(OverlayCanvas::new(viewport))
    }

    fn add_listener(&mut self, kind: EventKind) -> ListenerId {
        self.listeners.add(kind)
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn is_listening(&self, kind: EventKind) -> bool {
        self.listeners.is_listening(kind)
    }

    fn request_frame(&mut self) -> FrameHandle {
        let handle = self.frames.request();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames.cancel(handle);
    }

    fn take_due_frame(&mut self) -> Option<FrameHandle> {
        self.frames.take_due()
    }
}
