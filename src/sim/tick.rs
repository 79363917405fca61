//! Per-frame simulation tick
//!
//! Advances every particle by one display frame. Time is measured in frames,
//! so all constants are per-frame quantities.

use glam::Vec2;

use super::state::{Particle, ParticleField};
use crate::settings::FieldSettings;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Pointer position in surface coordinates, `None` when it left the surface
    pub pointer: Option<Vec2>,
}

impl TickInput {
    pub fn with_pointer(pointer: Vec2) -> Self {
        Self {
            pointer: Some(pointer),
        }
    }
}

/// Velocity change pulling a particle at `pos` toward `pointer`.
///
/// Scales linearly from `strength` at the pointer to zero at `radius`.
/// Zero outside the radius, and zero when the particle sits exactly on the
/// pointer since the direction is undefined there.
pub fn pointer_force(pos: Vec2, pointer: Vec2, radius: f32, strength: f32) -> Vec2 {
    let to_pointer = pointer - pos;
    let distance = to_pointer.length();
    if distance <= 0.0 || distance >= radius {
        return Vec2::ZERO;
    }
    let falloff = (radius - distance) / radius;
    to_pointer / distance * falloff * strength
}

/// Spring, pointer, friction, then integrate
fn step_particle(particle: &mut Particle, pointer: Option<Vec2>, settings: &FieldSettings) {
    particle.vel += (particle.origin() - particle.pos) * settings.spring;

    if let Some(pointer) = pointer {
        particle.vel += pointer_force(
            particle.pos,
            pointer,
            settings.interaction_radius,
            settings.interaction_strength,
        );
    }

    particle.vel *= settings.friction;
    particle.pos += particle.vel;
}

/// Advance the field by one frame
pub fn tick(field: &mut ParticleField, input: &TickInput, settings: &FieldSettings) {
    for particle in &mut field.particles {
        step_particle(particle, input.pointer, settings);
    }
    field.frame += 1;
}
