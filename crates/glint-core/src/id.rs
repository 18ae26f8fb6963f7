//! Monotonic particle identities

use std::fmt;

/// Identity of a single particle.
///
/// Issued in strictly increasing order by an [`IdAllocator`]. Only used for
/// tracing; particles are never looked up by id.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct ParticleId(pub u64);

impl ParticleId {
    /// Get the raw u64 value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParticleId({})", self.0)
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Post-increment counter handing out [`ParticleId`]s, starting at 0.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current value and advance the counter
    pub fn next_id(&mut self) -> ParticleId {
        let id = ParticleId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to `next_id` will return
    pub fn peek(&self) -> ParticleId {
        ParticleId(self.next)
    }
}
