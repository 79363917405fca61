//! Frame driver
//!
//! Owns the field and its inputs, and turns one display refresh into one
//! tick plus one render. The browser loop, the native binary and the tests
//! all drive the field through this.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::renderer::{FrameStats, Surface, render};
use crate::settings::FieldSettings;
use crate::sim::{ParticleField, TickInput, tick};

pub struct FieldDriver {
    settings: FieldSettings,
    field: ParticleField,
    input: TickInput,
    rng: Pcg32,
    /// Frames across all field rebuilds
    total_frames: u64,
}

impl FieldDriver {
    /// Build the initial field for a surface inside a viewport of `viewport_width`
    pub fn new(
        settings: FieldSettings,
        viewport_width: f32,
        width: f32,
        height: f32,
        seed: u64,
    ) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let count = settings.particle_count(viewport_width);
        let field = ParticleField::new(width, height, count, &settings, &mut rng);
        log::info!("Particle field: {count} particles on {width}x{height}");
        Self {
            settings,
            field,
            input: TickInput::default(),
            rng,
            total_frames: 0,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Pointer moved (`Some`) or left the surface (`None`)
    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.input.pointer = pointer;
    }

    /// Discard every particle and rebuild for the new surface size
    pub fn resize(&mut self, viewport_width: f32, width: f32, height: f32) {
        let count = self.settings.particle_count(viewport_width);
        self.field = ParticleField::new(width, height, count, &self.settings, &mut self.rng);
        log::info!("Resized particle field: {count} particles on {width}x{height}");
    }

    /// Advance without drawing
    pub fn step(&mut self) {
        tick(&mut self.field, &self.input, &self.settings);
        self.total_frames += 1;
    }

    /// One display refresh: tick, then draw
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        self.step();
        let stats = render(&self.field, &self.settings, surface);
        log::trace!(
            "frame {}: {} particles, {} connections",
            self.total_frames,
            stats.particles,
            stats.connections
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};

    fn driver(viewport_width: f32) -> FieldDriver {
        FieldDriver::new(FieldSettings::default(), viewport_width, 800.0, 600.0, 42)
    }

    #[test]
    fn test_count_from_viewport() {
        assert_eq!(driver(500.0).field().len(), 60);
        assert_eq!(driver(1280.0).field().len(), 120);
    }

    #[test]
    fn test_frame_ticks_then_draws() {
        let mut d = driver(1280.0);
        let mut surface = RecordingSurface::new();
        let stats = d.frame(&mut surface);

        assert_eq!(d.field().frame(), 1);
        assert_eq!(d.total_frames(), 1);
        assert_eq!(stats.particles, 120);
        assert_eq!(surface.commands[0], DrawCommand::Clear);
        assert_eq!(surface.circles().count(), 120);
        assert_eq!(surface.lines().count(), stats.connections);
    }

    #[test]
    fn test_undisturbed_field_stays_still() {
        let mut d = driver(1280.0);
        let before = d.field().particles().to_vec();
        for _ in 0..60 {
            d.step();
        }
        assert_eq!(d.field().particles(), &before[..]);
    }

    #[test]
    fn test_resize_rebuilds_field() {
        let mut d = driver(1280.0);
        d.set_pointer(Some(Vec2::new(400.0, 300.0)));
        for _ in 0..20 {
            d.step();
        }
        let old = d.field().particles().to_vec();

        d.resize(600.0, 600.0, 900.0);
        let field = d.field();
        assert_eq!(field.len(), 60);
        assert_eq!(field.size(), Vec2::new(600.0, 900.0));
        assert_eq!(field.frame(), 0);
        for p in field.particles() {
            assert_eq!(p.pos(), p.origin());
            assert_eq!(p.vel(), Vec2::ZERO);
        }
        assert_ne!(field.particles()[0].origin(), old[0].origin());
        // Total frame count survives the rebuild
        assert_eq!(d.total_frames(), 20);
    }

    #[test]
    fn test_pointer_set_and_cleared() {
        let mut d = driver(1280.0);
        d.set_pointer(Some(Vec2::new(1.0, 2.0)));
        assert_eq!(d.input.pointer, Some(Vec2::new(1.0, 2.0)));
        d.set_pointer(None);
        assert_eq!(d.input.pointer, None);
    }

    #[test]
    fn test_pointer_disturbs_field() {
        let mut d = driver(1280.0);
        let near = d.field().particles()[0].pos() + Vec2::new(10.0, 0.0);
        d.set_pointer(Some(near));
        for _ in 0..10 {
            d.step();
        }
        assert!(d.field().particles()[0].displacement() > 1.0);

        d.set_pointer(None);
        for _ in 0..400 {
            d.step();
        }
        assert!(d.field().max_displacement() < 1e-2);
    }
}
