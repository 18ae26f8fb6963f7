//! Movement-driven spawning

use crate::config::TrailConfig;
use crate::particle::Particle;
use crate::rand::RandomSource;
use glint_core::{IdAllocator, Vec2};

/// Maybe spawn one particle for a pointer event at (x, y).
///
/// Draw order is fixed: gate, x jitter, y jitter, size, decay. A rejected
/// gate consumes only the first draw and does not touch the id counter.
pub fn try_spawn<R: RandomSource + ?Sized>(
    config: &TrailConfig,
    rng: &mut R,
    ids: &mut IdAllocator,
    x: f64,
    y: f64,
) -> Option<Particle> {
    if rng.next_f64() <= config.spawn_threshold {
        return None;
    }

    let spread = config.jitter * 2.0;
    let px = x + (rng.next_f64() - 0.5) * spread;
    let py = y + (rng.next_f64() - 0.5) * spread;
    let size = rng.range(config.size_min, config.size_max);
    let decay = rng.range(config.decay_min, config.decay_max);

    Some(Particle::new(
        ids.next_id(),
        Vec2::new(px as f32, py as f32),
        size as f32,
        decay,
    ))
}
