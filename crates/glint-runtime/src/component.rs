//! Overlay component trait and dispatch helpers

use crate::event::HostEvent;
use crate::frame::FrameHandle;
use crate::host::Host;
use glint_core::Result;

/// A component mounted on a host for the lifetime of a page.
///
/// `mount` registers listeners and requests the first frame; `unmount`
/// removes every registration and cancels the pending frame, after which no
/// callback may have any effect.
pub trait OverlayComponent<H: Host> {
    /// Called once when the host page mounts the component
    fn mount(&mut self, host: &mut H) -> Result<()>;

    /// Called for each event of a kind the component listens for
    fn handle_event(&mut self, event: &HostEvent, host: &mut H);

    /// Called when a requested frame comes due
    fn frame(&mut self, handle: FrameHandle, host: &mut H);

    /// Called when the host page unmounts the component
    fn unmount(&mut self, host: &mut H);

    /// Human-readable name for this component
    fn name(&self) -> &str;
}

/// Deliver `event` if the host has a listener for its kind.
/// Returns whether it was delivered.
pub fn dispatch_event<H, C>(component: &mut C, host: &mut H, event: HostEvent) -> bool
where
    H: Host,
    C: OverlayComponent<H> + ?Sized,
{
    if !host.is_listening(event.kind()) {
        return false;
    }
    component.handle_event(&event, host);
    true
}

/// Run the due frame, if one was requested. Returns whether a frame ran.
pub fn run_frame<H, C>(component: &mut C, host: &mut H) -> bool
where
    H: Host,
    C: OverlayComponent<H> + ?Sized,
{
    let Some(handle) = host.take_due_frame() else {
        return false;
    };
    component.frame(handle, host);
    true
}
