//! Field state and particle types

use glam::Vec2;
use rand::Rng;

use crate::settings::FieldSettings;

/// A point particle anchored to its spawn position.
///
/// Position and velocity only change inside the per-frame tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub(crate) pos: Vec2,
    pub(crate) vel: Vec2,
    /// Anchor the spring pulls back to; never moves
    origin: Vec2,
    radius: f32,
}

impl Particle {
    /// Particle at rest on its own origin
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            origin: pos,
            radius,
        }
    }

    /// Spawn at a uniformly random point of a `size` rectangle
    pub fn random<R: Rng>(rng: &mut R, size: Vec2, settings: &FieldSettings) -> Self {
        let pos = Vec2::new(
            rng.random::<f32>() * size.x.max(0.0),
            rng.random::<f32>() * size.y.max(0.0),
        );
        let span = settings.radius_max - settings.radius_min;
        let radius = settings.radius_min + rng.random::<f32>() * span;
        Self::new(pos, radius)
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Distance from the anchor point
    pub fn displacement(&self) -> f32 {
        self.pos.distance(self.origin)
    }
}

/// The full set of particles on one surface.
///
/// The particle count is fixed for the lifetime of a field; a resize builds
/// a new field instead of mutating this one.
#[derive(Debug, Clone)]
pub struct ParticleField {
    pub(crate) particles: Vec<Particle>,
    size: Vec2,
    /// Ticks since construction
    pub(super) frame: u64,
}

impl ParticleField {
    /// Scatter `count` particles uniformly over a `width` x `height` surface
    pub fn new<R: Rng>(
        width: f32,
        height: f32,
        count: usize,
        settings: &FieldSettings,
        rng: &mut R,
    ) -> Self {
        let size = Vec2::new(width, height);
        let particles = (0..count)
            .map(|_| Particle::random(rng, size, settings))
            .collect();
        Self {
            particles,
            size,
            frame: 0,
        }
    }

    /// Field with explicitly placed particles
    pub fn from_particles(width: f32, height: f32, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            size: Vec2::new(width, height),
            frame: 0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Largest distance any particle currently sits from its origin
    pub fn max_displacement(&self) -> f32 {
        self.particles
            .iter()
            .map(Particle::displacement)
            .fold(0.0, f32::max)
    }
}
