//! Wire-frame models
//!
//! Models are normalized point sequences centered at the origin; the
//! transform in [`crate::geometry`] rotates, scales, and translates them
//! into world space per entity.

use console_engine::math::{constants::TAU, Vec2};
use rand::Rng;

/// Vertex count of the asteroid polygon.
pub const ASTEROID_VERTS: usize = 20;

/// The ship model: an isosceles triangle pointing up, already at draw
/// scale (drawn with scale factor 1).
pub fn ship() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, -5.0),
        Vec2::new(-2.5, 2.5),
        Vec2::new(2.5, 2.5),
    ]
}

/// A lumpy asteroid polygon: [`ASTEROID_VERTS`] points evenly spaced
/// around a circle, each pushed to a random radius in `[0.8, 1.2)`.
/// Generated once at init; all asteroids share the one shape, scaled by
/// their radius.
pub fn asteroid<R: Rng>(rng: &mut R) -> Vec<Vec2> {
    (0..ASTEROID_VERTS)
        .map(|i| {
            let radius = rng.gen_range(0.8..1.2);
            let a = (i as f32 / ASTEROID_VERTS as f32) * TAU;
            Vec2::new(radius * a.sin(), radius * a.cos())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_is_a_triangle() {
        let model = ship();
        assert_eq!(model.len(), 3);
        // nose points up
        assert!(model[0].y < 0.0);
    }

    #[test]
    fn test_asteroid_vertices_stay_near_unit_circle() {
        let mut rng = rand::thread_rng();
        let model = asteroid(&mut rng);
        assert_eq!(model.len(), ASTEROID_VERTS);
        for v in &model {
            let r = v.magnitude();
            assert!((0.8..1.2).contains(&r), "vertex radius {r} out of range");
        }
    }
}
