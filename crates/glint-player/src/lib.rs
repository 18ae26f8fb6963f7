//! Glint Player - standalone window host for the cursor trail
//!
//! This crate provides the `PlayerApp` application handler, which mounts a
//! `TrailAnimator` on a winit window and renders it with wgpu.

pub mod config;
mod player_app;
mod window_host;

pub use config::{PlayerConfig, WindowConfig};
pub use player_app::PlayerApp;
pub use window_host::WindowHost;
