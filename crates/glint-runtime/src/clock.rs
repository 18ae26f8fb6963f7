//! Frame timing for diagnostics
//!
//! The trail advances once per frame, not per second, so this clock never
//! feeds the simulation. It only reports how fast frames arrive.

use std::time::Instant;

/// Smoothing factor for the running frames-per-second estimate
const FPS_SMOOTHING: f64 = 0.1;

/// Tracks time between frames and a smoothed frame rate
pub struct FrameClock {
    /// Total elapsed time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Frames ticked so far
    pub frame_count: u64,
    /// Smoothed frames per second
    fps: f64,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            frame_count: 0,
            fps: 0.0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock. Call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            self.frame_count += 1;
            return;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.advance(elapsed);
    }

    /// Record a frame that took `elapsed` seconds
    pub fn advance(&mut self, elapsed: f64) {
        // Clamp so a stalled window does not wreck the estimate (max 250ms)
        self.delta_time = elapsed.clamp(0.0, 0.25);
        self.total_time += self.delta_time;
        self.frame_count += 1;

        if self.delta_time > 0.0 {
            let instant_fps = 1.0 / self.delta_time;
            self.fps = if self.fps == 0.0 {
                instant_fps
            } else {
                self.fps + (instant_fps - self.fps) * FPS_SMOOTHING
            };
        }
    }

    /// Smoothed frames per second (0 until two frames have been seen)
    pub fn fps(&self) -> f64 {
        self.fps
    }
}
