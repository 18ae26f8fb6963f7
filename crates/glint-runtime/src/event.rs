//! Events a host delivers to mounted components

use glint_core::Viewport;

/// The kinds of event a component can listen for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMove,
    Resize,
}

/// An event from the host environment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Pointer moved to (x, y) in surface pixels
    PointerMoved { x: f64, y: f64 },
    /// The viewport changed size
    Resized(Viewport),
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::PointerMoved { .. } => EventKind::PointerMove,
            HostEvent::Resized(_) => EventKind::Resize,
        }
    }
}
