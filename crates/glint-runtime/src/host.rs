//! The environment an overlay component is mounted into

use crate::event::EventKind;
use crate::frame::FrameHandle;
use crate::listener::ListenerId;
use glint_core::{Canvas, Result, Viewport};

/// Services a host offers to a mounted component.
///
/// Everything runs on one thread: events and frames are delivered one at a
/// time, and each call runs to completion before the next is delivered.
pub trait Host {
    /// The drawing surface this host hands out
    type Canvas: Canvas;

    /// Current viewport size
    fn viewport(&self) -> Viewport;

    /// Create a full-window drawing surface. Fails with
    /// `GlintError::SurfaceUnavailable` if the host cannot draw.
    fn create_canvas(&mut self, viewport: Viewport) -> Result<Self::Canvas>;

    /// Start delivering events of `kind`
    fn add_listener(&mut self, kind: EventKind) -> ListenerId;

    /// Stop delivering events for this registration
    fn remove_listener(&mut self, id: ListenerId) -> bool;

    /// Whether any listener for `kind` is registered
    fn is_listening(&self, kind: EventKind) -> bool;

    /// Ask for one frame callback at the next display refresh
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a frame request before it fires
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Take the frame request that is due now, if any
    fn take_due_frame(&mut self) -> Option<FrameHandle>;
}
