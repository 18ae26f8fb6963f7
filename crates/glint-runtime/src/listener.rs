//! Listener registrations

use crate::event::EventKind;

/// Token returned when a listener is registered; needed to remove it again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Tracks which event kinds currently have listeners
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    active: Vec<(ListenerId, EventKind)>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `kind`
    pub fn add(&mut self, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.active.push((id, kind));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.active.len();
        self.active.retain(|(active_id, _)| *active_id != id);
        self.active.len() != before
    }

    /// Is at least one listener registered for `kind`?
    pub fn is_listening(&self, kind: EventKind) -> bool {
        self.active.iter().any(|(_, k)| *k == kind)
    }

    /// Number of listeners registered for `kind`
    pub fn count(&self, kind: EventKind) -> usize {
        self.active.iter().filter(|(_, k)| *k == kind).count()
    }

    /// Total registered listeners
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove() {
        let mut registry = ListenerRegistry::new();
        assert!(registry.is_empty());

        let pointer = registry.add(EventKind::PointerMove);
        let resize = registry.add(EventKind::Resize);
        assert_ne!(pointer, resize);
        assert!(registry.is_listening(EventKind::PointerMove));
        assert_eq!(registry.len(), 2);

        assert!(registry.remove(pointer));
        assert!(!registry.is_listening(EventKind::PointerMove));
        assert!(registry.is_listening(EventKind::Resize));
    }

    #[test]
    fn double_remove_reports_false() {
        let mut registry = ListenerRegistry::new();
        let id = registry.add(EventKind::Resize);
        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn ids_are_not_reused() {
        let mut registry = ListenerRegistry::new();
        let first = registry.add(EventKind::Resize);
        registry.remove(first);
        let second = registry.add(EventKind::Resize);
        assert_ne!(first, second);
        assert_eq!(registry.count(EventKind::Resize), 1);
    }
}
