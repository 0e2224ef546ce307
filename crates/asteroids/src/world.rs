//! Toroidal world bounds
//!
//! The play field wraps on both axes: exiting one edge re-enters from the
//! opposite edge. The wrap is a single fold of exactly one world-length,
//! which is sufficient because no displacement exceeds one world-length per
//! frame (velocities and frame times are bounded).

use console_engine::math::Vec2;

/// Fixed world dimensions with toroidal wrapping.
#[derive(Debug, Clone, Copy)]
pub struct WorldBounds {
    /// World width in cells
    pub width: f32,

    /// World height in cells
    pub height: f32,
}

impl WorldBounds {
    /// Create bounds for a `width x height` world.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Fold a coordinate into `[0, extent)` by adding or subtracting one
    /// extent. In-range values pass through unchanged.
    pub fn wrap_axis(value: f32, extent: f32) -> f32 {
        if value < 0.0 {
            value + extent
        } else if value >= extent {
            value - extent
        } else {
            value
        }
    }

    /// Fold a point into `[0, width) x [0, height)`, each axis
    /// independently.
    pub fn wrap(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            Self::wrap_axis(point.x, self.width),
            Self::wrap_axis(point.y, self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_is_unchanged() {
        assert_eq!(WorldBounds::wrap_axis(0.0, 160.0), 0.0);
        assert_eq!(WorldBounds::wrap_axis(79.5, 160.0), 79.5);
        assert_eq!(WorldBounds::wrap_axis(159.9, 160.0), 159.9);
    }

    #[test]
    fn test_folds_one_extent_each_way() {
        assert_eq!(WorldBounds::wrap_axis(-1.0, 160.0), 159.0);
        assert_eq!(WorldBounds::wrap_axis(160.0, 160.0), 0.0);
        assert_eq!(WorldBounds::wrap_axis(165.5, 160.0), 5.5);
    }

    #[test]
    fn test_wrap_is_idempotent_on_result() {
        let bounds = WorldBounds::new(160.0, 100.0);
        let once = bounds.wrap(Vec2::new(-3.0, 104.0));
        let twice = bounds.wrap(once);
        assert_eq!(once, twice);
        assert!(once.x >= 0.0 && once.x < 160.0);
        assert!(once.y >= 0.0 && once.y < 100.0);
    }

    #[test]
    fn test_axes_wrap_independently() {
        let bounds = WorldBounds::new(160.0, 100.0);
        let wrapped = bounds.wrap(Vec2::new(-10.0, 50.0));
        assert_eq!(wrapped, Vec2::new(150.0, 50.0));
    }
}
