//! Random star generation.

use std::f32::consts::TAU;
use std::ops::Range;

use rand::Rng;
use stardrift_core::{Point, Surface};

/// Value ranges stars are drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRanges {
    pub radius: Range<f32>,
    pub base_opacity: Range<f32>,
    pub twinkle_speed: Range<f32>,
    pub twinkle_phase: Range<f32>,
    pub vx: Range<f32>,
    pub vy: Range<f32>,
}

impl Default for StarRanges {
    fn default() -> Self {
        Self {
            radius: 0.6..1.8,
            base_opacity: 0.25..0.95,
            // Slow: one full twinkle every 0.6-3 seconds.
            twinkle_speed: 0.002..0.01,
            twinkle_phase: 0.0..TAU,
            vx: -0.015..0.015,
            vy: -0.01..0.01,
        }
    }
}

/// Build `count` fresh stars spread uniformly over `surface`.
pub fn make_stars<R: Rng + ?Sized>(
    count: usize,
    surface: &Surface,
    ranges: &StarRanges,
    rng: &mut R,
) -> Vec<Point> {
    (0..count)
        .map(|_| Point {
            x: uniform(rng, 0.0..surface.width),
            y: uniform(rng, 0.0..surface.height),
            radius: uniform(rng, ranges.radius.clone()),
            base_opacity: uniform(rng, ranges.base_opacity.clone()),
            twinkle_speed: uniform(rng, ranges.twinkle_speed.clone()),
            twinkle_phase: uniform(rng, ranges.twinkle_phase.clone()),
            vx: uniform(rng, ranges.vx.clone()),
            vy: uniform(rng, ranges.vy.clone()),
        })
        .collect()
}

/// Sample `range`, collapsing to its start when it is empty.
fn uniform<R: Rng + ?Sized>(rng: &mut R, range: Range<f32>) -> f32 {
    if range.is_empty() {
        range.start
    } else {
        rng.gen_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_count_and_bounds() {
        let surface = Surface::from_viewport(120.0, 60.0, 1.0);
        let ranges = StarRanges::default();
        let mut rng = StdRng::seed_from_u64(7);
        let stars = make_stars(70, &surface, &ranges, &mut rng);

        assert_eq!(stars.len(), 70);
        for s in &stars {
            assert!((0.0..120.0).contains(&s.x));
            assert!((0.0..60.0).contains(&s.y));
            assert!(ranges.radius.contains(&s.radius));
            assert!(ranges.base_opacity.contains(&s.base_opacity));
            assert!(ranges.twinkle_speed.contains(&s.twinkle_speed));
            assert!(ranges.twinkle_phase.contains(&s.twinkle_phase));
            assert!(ranges.vx.contains(&s.vx));
            assert!(ranges.vy.contains(&s.vy));
        }
    }

    #[test]
    fn test_zero_sized_surface() {
        let surface = Surface::from_viewport(0.0, 0.0, 1.0);
        let mut rng = StdRng::seed_from_u64(1);
        let stars = make_stars(10, &surface, &StarRanges::default(), &mut rng);
        assert_eq!(stars.len(), 10);
        assert!(stars.iter().all(|s| s.x == 0.0 && s.y == 0.0));
    }

    #[test]
    fn test_same_seed_same_stars() {
        let surface = Surface::from_viewport(40.0, 20.0, 1.0);
        let ranges = StarRanges::default();
        let a = make_stars(5, &surface, &ranges, &mut StdRng::seed_from_u64(3));
        let b = make_stars(5, &surface, &ranges, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
