//! Game entity records
//!
//! Every moving thing in the game (ship, asteroid, bullet) is the same
//! plain data record. Removal is a two-phase mark-then-filter: collisions
//! clear the `alive` flag mid-frame, and the step's filter phases drop dead
//! entities at the end of the frame. Coordinates are never overloaded as
//! removal tags.

use console_engine::math::Vec2;

/// A ship, asteroid, or bullet.
#[derive(Debug, Clone)]
pub struct SpaceObject {
    /// Position in world units (same scale as screen cells)
    pub position: Vec2,

    /// Velocity in world units per second
    pub velocity: Vec2,

    /// Integer radius; 0 for bullets, positive for ship and asteroids
    pub size: u32,

    /// Orientation in radians; unused (zero) for bullets
    pub angle: f32,

    /// Cleared when the object is marked for removal this frame
    pub alive: bool,
}

impl SpaceObject {
    /// Create an asteroid with the given position, velocity, and radius.
    pub fn asteroid(position: Vec2, velocity: Vec2, size: u32) -> Self {
        Self {
            position,
            velocity,
            size,
            angle: 0.0,
            alive: true,
        }
    }

    /// Create a bullet. Bullets have no radius and no orientation; they
    /// render as single points.
    pub fn bullet(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            size: 0,
            angle: 0.0,
            alive: true,
        }
    }

    /// Advance position by velocity over `dt` seconds.
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Mark this object for removal at the end of the frame.
    pub fn kill(&mut self) {
        self.alive = false;
    }
}

/// The player: a singleton [`SpaceObject`] plus the death flag.
///
/// The flag is set when the ship touches an asteroid and consumed by the
/// reset at the top of the *next* frame, so the death frame is still drawn.
#[derive(Debug, Clone)]
pub struct Player {
    /// The ship itself
    pub object: SpaceObject,

    /// Set on collision, consumed by the next frame's reset
    pub dead: bool,
}

impl Player {
    /// Ship collision radius and draw scale.
    pub const SIZE: u32 = 5;

    /// Create a live player at the given position, at rest, facing up.
    pub fn new(position: Vec2) -> Self {
        Self {
            object: SpaceObject {
                position,
                velocity: Vec2::zeros(),
                size: Self::SIZE,
                angle: 0.0,
                alive: true,
            },
            dead: false,
        }
    }

    /// Reset the ship in place: recenter, stop, face up, clear the flag.
    pub fn reset(&mut self, position: Vec2) {
        self.object.position = position;
        self.object.velocity = Vec2::zeros();
        self.object.angle = 0.0;
        self.object.alive = true;
        self.dead = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_has_no_size_or_angle() {
        let bullet = SpaceObject::bullet(Vec2::new(3.0, 4.0), Vec2::new(0.0, -50.0));
        assert_eq!(bullet.size, 0);
        assert_eq!(bullet.angle, 0.0);
        assert!(bullet.alive);
    }

    #[test]
    fn test_integrate_moves_by_velocity_times_dt() {
        let mut object = SpaceObject::asteroid(Vec2::new(10.0, 10.0), Vec2::new(8.0, -6.0), 16);
        object.integrate(0.5);
        assert_eq!(object.position, Vec2::new(14.0, 7.0));
    }

    #[test]
    fn test_player_reset_clears_motion_and_flag() {
        let mut player = Player::new(Vec2::new(80.0, 50.0));
        player.object.velocity = Vec2::new(5.0, 5.0);
        player.object.angle = 1.2;
        player.dead = true;

        player.reset(Vec2::new(80.0, 50.0));
        assert_eq!(player.object.velocity, Vec2::zeros());
        assert_eq!(player.object.angle, 0.0);
        assert!(!player.dead);
    }
}
