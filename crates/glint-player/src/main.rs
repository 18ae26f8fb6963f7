//! Glint Player - cursor trail in a window
//!
//! Opens a window and draws a glowing particle trail behind the pointer.
//!
//! Usage:
//!   glint-player [--config <path>] [--seed <u32>] [--fullscreen] [--transparent]

use anyhow::{Context, Result};
use clap::Parser;
use glint_player::{PlayerApp, PlayerConfig};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "glint-player")]
#[command(about = "Glint player - a glowing particle trail that follows the cursor")]
struct Args {
    /// Path to a TOML config file with [window] and [trail] tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the trail's random source (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Launch in fullscreen mode
    #[arg(long)]
    fullscreen: bool,

    /// Request a see-through window
    #[arg(long)]
    transparent: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = PlayerConfig::load(args.config.as_deref()).with_context(|| {
        format!(
            "Failed to load config: {}",
            args.config
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )
    })?;
    if args.transparent {
        config.window.transparent = true;
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("trail seed {seed}");

    // Frames are driven by redraw requests from the trail itself
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = PlayerApp::new(config, seed, args.fullscreen);
    event_loop.run_app(&mut app)?;

    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
