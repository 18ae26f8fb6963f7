//! In-memory host backed by a recording canvas

use crate::event::EventKind;
use crate::frame::{FrameHandle, FrameQueue};
use crate::host::Host;
use crate::listener::{ListenerId, ListenerRegistry};
use glint_core::{GlintError, RecordingCanvas, Result, Viewport};

/// A host with no window. Frames only run when the caller steps them.
pub struct HeadlessHost {
    viewport: Viewport,
    surface_available: bool,
    listeners: ListenerRegistry,
    frames: FrameQueue,
    cancelled: usize,
}

impl HeadlessHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            surface_available: true,
            listeners: ListenerRegistry::new(),
            frames: FrameQueue::new(),
            cancelled: 0,
        }
    }

    /// A host whose `create_canvas` always fails, as when the environment
    /// has no 2D drawing capability
    pub fn without_surface(viewport: Viewport) -> Self {
        Self {
            surface_available: false,
            ..Self::new(viewport)
        }
    }

    /// Change the viewport. The caller dispatches the matching resize event.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frames.pending()
    }

    /// Number of successful frame cancellations
    pub fn cancelled_frames(&self) -> usize {
        self.cancelled
    }
}

impl Host for HeadlessHost {
    type Canvas = RecordingCanvas;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn create_canvas(&mut self, viewport: Viewport) -> Result<RecordingCanvas> {
        if !self.surface_available {
            return Err(GlintError::SurfaceUnavailable(
                "headless host has no 2d surface".into(),
            ));
        }
        Ok(RecordingCanvas::new(viewport))
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
        self.frames.request()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.frames.cancel(handle) {
            self.cancelled += 1;
        }
    }

    fn take_due_frame(&mut self) -> Option<FrameHandle> {
        self.frames.take_due()
    }
}
