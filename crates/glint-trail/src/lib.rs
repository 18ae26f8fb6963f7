//! Glint Trail - cursor-following glow particles
//!
//! A small, self-contained animation loop:
//! - particles spawn from pointer movement behind a probability gate
//! - every frame each particle's opacity falls by its own decay rate
//! - faded particles are dropped in the same frame, survivors are drawn as a
//!   radial glow, with a four-pointed star outline on the larger ones
//!
//! `TrailAnimator` is the component a host mounts; it owns the particles,
//! the drawing surface and its host registrations.

pub mod animator;
pub mod config;
pub mod glyph;
pub mod particle;
pub mod rand;
pub mod spawn;

pub use animator::TrailAnimator;
pub use config::TrailConfig;
pub use particle::{Particle, ParticleField};
pub use rand::{RandomSource, TrailRng};
