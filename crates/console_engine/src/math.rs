//! Math utilities and types
//!
//! Provides the fundamental math types shared by the engine and games
//! built on it. Everything is 2D; coordinates are in world units, which
//! for this engine are the same scale as screen cells.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi, one full turn
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;
}

/// Unit vector for a facing angle, where angle 0 points "up" the screen
/// and positive angles turn clockwise.
pub fn facing(angle: f32) -> Vec2 {
    Vec2::new(angle.sin(), -angle.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_facing_up_at_zero() {
        let dir = facing(0.0);
        assert_relative_eq!(dir.x, 0.0);
        assert_relative_eq!(dir.y, -1.0);
    }

    #[test]
    fn test_facing_right_at_quarter_turn() {
        let dir = facing(constants::HALF_PI);
        assert_relative_eq!(dir.x, 1.0);
        assert_relative_eq!(dir.y, 0.0, epsilon = 1e-6);
    }
}
