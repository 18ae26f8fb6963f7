//! Particle state and the insertion-ordered particle field

use glint_core::{ParticleId, Vec2};

/// One glow glyph.
///
/// Size and decay are fixed at spawn; only opacity changes afterwards, and
/// it only goes down.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    id: ParticleId,
    position: Vec2,
    size: f32,
    opacity: f64,
    decay: f64,
}

impl Particle {
    /// A fresh, fully opaque particle
    pub fn new(id: ParticleId, position: Vec2, size: f32, decay: f64) -> Self {
        Self {
            id,
            position,
            size,
            opacity: 1.0,
            decay,
        }
    }

    pub fn id(&self) -> ParticleId {
        self.id
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Glow radius in pixels
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Opacity lost per frame
    pub fn decay(&self) -> f64 {
        self.decay
    }

    pub fn is_alive(&self) -> bool {
        self.opacity > 0.0
    }

    /// Apply one frame of decay. Returns false once the particle has faded
    /// out; opacity is then pinned at 0.
    pub fn fade(&mut self) -> bool {
        self.opacity -= self.decay;
        if self.opacity <= 0.0 {
            self.opacity = 0.0;
            return false;
        }
        true
    }
}

/// Live particles in spawn order. Spawn order is draw order.
#[derive(Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Fade every particle once, in order. Particles that fade out are
    /// removed; `visit` sees each survivor after its decay. Returns the
    /// number removed.
    pub fn advance<F>(&mut self, mut visit: F) -> usize
    where
        F: FnMut(&Particle),
    {
        let before = self.particles.len();
        self.particles.retain_mut(|p| {
            if !p.fade() {
                return false;
            }
            visit(p);
            true
        });
        before - self.particles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
