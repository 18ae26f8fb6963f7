//! Glint Core - Foundational types for the Glint overlay
//!
//! This crate provides the types that all other Glint crates depend on:
//! - `ParticleId` - Monotonic particle identities
//! - `Vec2`, `Color`, `Viewport` - 2D surface-space types
//! - `Canvas` - The drawing surface abstraction the trail renders into
//! - Error types and Result alias

mod canvas;
mod error;
mod id;
mod types;

pub use canvas::{Canvas, DrawOp, GradientStop, RecordingCanvas};
pub use error::{GlintError, Result};
pub use id::{IdAllocator, ParticleId};
pub use types::{Color, Vec2, Viewport};
