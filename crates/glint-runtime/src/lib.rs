//! Glint Runtime - Host-side plumbing for overlay components
//!
//! Provides the building blocks a host uses to drive an overlay:
//! - `Host`: what a component may ask of its environment
//! - `ListenerRegistry`: pointer/resize listener registrations
//! - `FrameQueue` / `FrameHandle`: cancellable request-next-frame scheduling
//! - `OverlayComponent`: trait for components mounted on a host
//! - `FrameClock`: frame timing for diagnostics
//! - `HeadlessHost`: in-memory host for tests and scripted runs

mod clock;
mod component;
mod event;
mod frame;
mod headless;
mod host;
mod listener;

pub use clock::FrameClock;
pub use component::{dispatch_event, run_frame, OverlayComponent};
pub use event::{EventKind, HostEvent};
pub use frame::{FrameHandle, FrameQueue};
pub use headless::HeadlessHost;
pub use host::Host;
pub use listener::{ListenerId, ListenerRegistry};
