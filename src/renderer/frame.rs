//! Frame rendering: particles and their connections as draw calls

use super::surface::Surface;
use crate::settings::FieldSettings;
use crate::sim::{ParticleField, connections};

/// Per-frame draw statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub connections: usize,
}

/// Clear the surface and draw the current field state
pub fn render<S: Surface + ?Sized>(
    field: &ParticleField,
    settings: &FieldSettings,
    surface: &mut S,
) -> FrameStats {
    surface.clear();

    for particle in field.particles() {
        surface.fill_circle(particle.pos(), particle.radius(), settings.particle_color);
    }

    let mut links = 0;
    for link in connections(
        field.particles(),
        settings.connection_distance,
        settings.line_alpha,
    ) {
        let color = settings.line_color.with_alpha(link.alpha);
        surface.stroke_line(link.from, link.to, settings.line_width, color);
        links += 1;
    }

    FrameStats {
        particles: field.len(),
        connections: links,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::sim::Particle;
    use glam::Vec2;

    #[test]
    fn test_render_scenario_two_particles() {
        let settings = FieldSettings {
            connection_distance: 20.0,
            ..Default::default()
        };
        let field = ParticleField::from_particles(
            100.0,
            100.0,
            vec![
                Particle::new(Vec2::ZERO, 1.0),
                Particle::new(Vec2::new(10.0, 0.0), 2.0),
            ],
        );
        let mut surface = RecordingSurface::new();
        let stats = render(&field, &settings, &mut surface);

        assert_eq!(stats, FrameStats { particles: 2, connections: 1 });
        assert_eq!(surface.commands[0], DrawCommand::Clear);
        assert_eq!(surface.circles().count(), 2);

        let lines: Vec<_> = surface.lines().collect();
        assert_eq!(lines.len(), 1);
        let DrawCommand::Line { width, color, .. } = lines[0] else {
            panic!("expected a line");
        };
        assert_eq!(*width, settings.line_width);
        assert!((color.a - settings.line_alpha * 0.5).abs() < 1e-6);
        assert_eq!((color.r, color.g, color.b), (139, 92, 246));
    }

    #[test]
    fn test_render_circles_use_particle_radius() {
        let settings = FieldSettings::default();
        let field = ParticleField::from_particles(
            100.0,
            100.0,
            vec![Particle::new(Vec2::new(3.0, 4.0), 2.5)],
        );
        let mut surface = RecordingSurface::new();
        render(&field, &settings, &mut surface);

        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::Clear,
                DrawCommand::Circle {
                    center: Vec2::new(3.0, 4.0),
                    radius: 2.5,
                    color: settings.particle_color,
                },
            ]
        );
    }

    #[test]
    fn test_render_far_particles_unconnected() {
        let settings = FieldSettings::default();
        let field = ParticleField::from_particles(
            1000.0,
            1000.0,
            vec![
                Particle::new(Vec2::ZERO, 1.0),
                Particle::new(Vec2::new(500.0, 500.0), 1.0),
            ],
        );
        let mut surface = RecordingSurface::new();
        let stats = render(&field, &settings, &mut surface);
        assert_eq!(stats.connections, 0);
        assert_eq!(surface.lines().count(), 0);
    }

    #[test]
    fn test_render_replaces_previous_frame() {
        let settings = FieldSettings::default();
        let field = ParticleField::from_particles(10.0, 10.0, vec![Particle::new(Vec2::ONE, 1.0)]);
        let mut surface = RecordingSurface::new();
        render(&field, &settings, &mut surface);
        render(&field, &settings, &mut surface);
        assert_eq!(surface.commands.len(), 2);
    }
}
