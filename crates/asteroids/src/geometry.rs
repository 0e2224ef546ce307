//! Polygon transform and collision test
//!
//! Pure geometry, no drawing: the world-space transform of a normalized
//! model and the point-in-circle test used for every collision in the game.

use console_engine::math::Vec2;

/// Transform a model centered at the origin into world space: rotate by
/// `angle`, then scale uniformly by `scale`, then translate to `position`.
///
/// The order is fixed and not commutative; it must match exactly to
/// reproduce the game's visuals.
pub fn transform_model(model: &[Vec2], position: Vec2, angle: f32, scale: f32) -> Vec<Vec2> {
    let (sin, cos) = angle.sin_cos();
    model
        .iter()
        .map(|v| {
            let rotated = Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos);
            rotated * scale + position
        })
        .collect()
}

/// Whether `point` lies strictly inside the circle at `center` with the
/// given radius. A point exactly on the boundary does not count as a hit.
pub fn point_in_circle(center: Vec2, radius: f32, point: Vec2) -> bool {
    (point - center).magnitude() < radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use console_engine::math::constants::HALF_PI;

    #[test]
    fn test_transform_applies_rotate_then_scale_then_translate() {
        // (1, 0) rotated a quarter turn -> (0, 1); scaled by 2 -> (0, 2);
        // translated by (10, 10) -> (10, 12). Any other order gives a
        // different point.
        let model = [Vec2::new(1.0, 0.0)];
        let out = transform_model(&model, Vec2::new(10.0, 10.0), HALF_PI, 2.0);
        assert_relative_eq!(out[0].x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(out[0].y, 12.0, epsilon = 1e-5);
    }

    #[test]
    fn test_transform_identity() {
        let model = [Vec2::new(0.0, -5.0), Vec2::new(2.5, 2.5)];
        let out = transform_model(&model, Vec2::zeros(), 0.0, 1.0);
        assert_relative_eq!(out[0].y, -5.0);
        assert_relative_eq!(out[1].x, 2.5);
    }

    #[test]
    fn test_point_on_boundary_is_not_a_hit() {
        let center = Vec2::new(10.0, 10.0);
        assert!(!point_in_circle(center, 5.0, Vec2::new(15.0, 10.0)));
    }

    #[test]
    fn test_point_epsilon_inside_is_a_hit() {
        let center = Vec2::new(10.0, 10.0);
        assert!(point_in_circle(center, 5.0, Vec2::new(14.999, 10.0)));
    }

    #[test]
    fn test_point_epsilon_outside_is_a_miss() {
        let center = Vec2::new(10.0, 10.0);
        assert!(!point_in_circle(center, 5.0, Vec2::new(15.001, 10.0)));
    }
}
