//! Proximity connections between particles

use glam::Vec2;

use super::state::Particle;

/// A link between two nearby particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    /// Index of the first particle (always less than `b`)
    pub a: usize,
    pub b: usize,
    pub from: Vec2,
    pub to: Vec2,
    /// Stroke alpha, fading linearly to zero at the threshold
    pub alpha: f32,
}

/// Alpha of a link at `distance`, or `None` if too far apart.
///
/// `threshold` must be positive (settings validation guarantees it).
#[inline]
pub fn link_alpha(distance: f32, threshold: f32, base_alpha: f32) -> Option<f32> {
    (distance < threshold).then(|| base_alpha * (1.0 - distance / threshold))
}

/// Every unordered pair closer than `threshold`. Quadratic in particle count.
pub fn connections(
    particles: &[Particle],
    threshold: f32,
    base_alpha: f32,
) -> impl Iterator<Item = Connection> + '_ {
    particles.iter().enumerate().flat_map(move |(a, p)| {
        particles[a + 1..]
            .iter()
            .enumerate()
            .filter_map(move |(offset, q)| {
                let alpha = link_alpha(p.pos.distance(q.pos), threshold, base_alpha)?;
                Some(Connection {
                    a,
                    b: a + 1 + offset,
                    from: p.pos,
                    to: q.pos,
                    alpha,
                })
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), 1.0)
    }

    #[test]
    fn test_two_particles_half_threshold() {
        let particles = vec![at(0.0, 0.0), at(10.0, 0.0)];
        let links: Vec<_> = connections(&particles, 20.0, 0.4).collect();
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        assert!((links[0].alpha - 0.2).abs() < 1e-6);
        assert_eq!(links[0].from, Vec2::ZERO);
        assert_eq!(links[0].to, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let particles = vec![at(0.0, 0.0), at(20.0, 0.0)];
        assert_eq!(connections(&particles, 20.0, 0.4).count(), 0);
    }

    #[test]
    fn test_coincident_particles_full_alpha() {
        let particles = vec![at(5.0, 5.0), at(5.0, 5.0)];
        let links: Vec<_> = connections(&particles, 20.0, 0.4).collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].alpha, 0.4);
    }

    #[test]
    fn test_each_pair_once() {
        // Three mutually close particles: 3 pairs, never (i, i) or (j, i)
        let particles = vec![at(0.0, 0.0), at(1.0, 0.0), at(0.0, 1.0)];
        let pairs: Vec<_> = connections(&particles, 20.0, 0.4)
            .map(|c| (c.a, c.b))
            .collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(connections(&[], 20.0, 0.4).count(), 0);
        assert_eq!(connections(&[at(1.0, 1.0)], 20.0, 0.4).count(), 0);
    }

    proptest! {
        #[test]
        fn prop_link_iff_closer_than_threshold(
            points in proptest::collection::vec((0.0f32..300.0, 0.0f32..300.0), 0..12),
            threshold in 1.0f32..200.0,
        ) {
            let particles: Vec<_> = points.iter().map(|&(x, y)| at(x, y)).collect();
            let links: Vec<_> = connections(&particles, threshold, 0.4).collect();

            for i in 0..particles.len() {
                for j in i + 1..particles.len() {
                    let d = particles[i].pos.distance(particles[j].pos);
                    let link = links.iter().find(|c| c.a == i && c.b == j);
                    match link {
                        Some(c) => {
                            prop_assert!(d < threshold);
                            prop_assert!((c.alpha - 0.4 * (1.0 - d / threshold)).abs() < 1e-5);
                        }
                        None => {
                            prop_assert!(d >= threshold);
                        }
                    }
                }
            }
        }
    }
}
