//! The per-frame simulation step
//!
//! [`AsteroidsGame`] holds all mutable game state explicitly (entities,
//! score, death flag) and advances it one frame at a time through
//! [`AsteroidsGame::step`]. The step's phase order is load-bearing: later
//! phases consume state mutated by earlier ones, so reordering changes
//! observable behavior (collision timing, same-frame splitting, the
//! one-frame-late death reset).

use crate::{
    config::{ControlsConfig, GameConfig, GameplayConfig},
    entity::{Player, SpaceObject},
    geometry, models,
    render::WrappedCanvas,
    world::WorldBounds,
};
use console_engine::{
    canvas::{Canvas, Color},
    input::InputManager,
    math::{
        constants::{HALF_PI, TAU},
        facing, Vec2,
    },
    AppError, Application, Engine,
};
use rand::Rng;

/// Snapshot of the game actions for one frame.
///
/// A plain record rather than a key query so the simulation step can be
/// driven without a backend (tests, replays).
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Turn counter-clockwise (key held)
    pub left: bool,

    /// Turn clockwise (key held)
    pub right: bool,

    /// Accelerate along the facing direction (key held)
    pub thrust: bool,

    /// Fire one bullet (key release edge, not held)
    pub fire: bool,
}

impl FrameInput {
    /// Sample the configured keys from the engine's input state.
    pub fn from_keys(input: &InputManager, controls: &ControlsConfig) -> Self {
        Self {
            left: input.held(controls.left),
            right: input.held(controls.right),
            thrust: input.held(controls.thrust),
            fire: input.released(controls.fire),
        }
    }
}

/// All game state, owned explicitly and advanced by [`AsteroidsGame::step`].
pub struct AsteroidsGame {
    config: GameplayConfig,
    controls: ControlsConfig,
    bounds: WorldBounds,

    ship_model: Vec<Vec2>,
    asteroid_model: Vec<Vec2>,

    player: Player,
    asteroids: Vec<SpaceObject>,
    bullets: Vec<SpaceObject>,
    score: u32,
}

impl AsteroidsGame {
    /// Create a fresh game for the configured field, already reset to the
    /// starting state.
    pub fn new(config: &GameConfig) -> Self {
        let bounds = WorldBounds::new(
            f32::from(config.console.width),
            f32::from(config.console.height),
        );
        let mut game = Self {
            config: config.gameplay.clone(),
            controls: config.controls.clone(),
            bounds,
            ship_model: models::ship(),
            asteroid_model: models::asteroid(&mut rand::thread_rng()),
            player: Player::new(Vec2::new(bounds.width / 2.0, bounds.height / 2.0)),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            score: 0,
        };
        game.reset();
        game
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Live asteroids.
    pub fn asteroids(&self) -> &[SpaceObject] {
        &self.asteroids
    }

    /// Live bullets.
    pub fn bullets(&self) -> &[SpaceObject] {
        &self.bullets
    }

    /// The player ship.
    pub fn player(&self) -> &Player {
        &self.player
    }

    fn center(&self) -> Vec2 {
        Vec2::new(self.bounds.width / 2.0, self.bounds.height / 2.0)
    }

    /// Reset to the starting state: two seed asteroids, ship recentered at
    /// rest, score zeroed, death flag cleared.
    pub fn reset(&mut self) {
        self.asteroids.clear();
        self.bullets.clear();

        let size = self.config.start_size;
        self.asteroids
            .push(SpaceObject::asteroid(Vec2::new(20.0, 20.0), Vec2::new(8.0, -6.0), size));
        self.asteroids
            .push(SpaceObject::asteroid(Vec2::new(100.0, 20.0), Vec2::new(-5.0, 3.0), size));

        self.player.reset(self.center());
        self.score = 0;
    }

    /// Advance the simulation by one frame and draw it.
    pub fn step(&mut self, input: FrameInput, canvas: &mut Canvas, dt: f32) {
        // A collision last frame reset the game at the top of this one;
        // the death frame itself was still drawn.
        if self.player.dead {
            log::debug!("ship destroyed, resetting game");
            self.reset();
        }

        let mut frame = WrappedCanvas::new(canvas, self.bounds);
        frame.clear();

        // Steer and thrust. Angle 0 faces up; thrust is acceleration, not
        // a direct velocity set.
        let ship = &mut self.player.object;
        if input.left {
            ship.angle -= self.config.turn_rate * dt;
        }
        if input.right {
            ship.angle += self.config.turn_rate * dt;
        }
        if input.thrust {
            ship.velocity += facing(ship.angle) * self.config.thrust * dt;
        }
        ship.integrate(dt);
        ship.position = self.bounds.wrap(ship.position);
        let ship_position = ship.position;

        // Ship against every live asteroid. Only the flag is set here; the
        // reset happens next frame.
        for asteroid in &self.asteroids {
            if asteroid.alive
                && geometry::point_in_circle(asteroid.position, asteroid.size as f32, ship_position)
            {
                self.player.dead = true;
            }
        }

        // Fire on the release edge.
        if input.fire {
            let direction = facing(self.player.object.angle);
            self.bullets.push(SpaceObject::bullet(
                ship_position,
                direction * self.config.bullet_speed,
            ));
        }

        // Asteroids: drift, spin, wrap, draw.
        for asteroid in &mut self.asteroids {
            asteroid.integrate(dt);
            asteroid.angle += self.config.asteroid_spin * dt;
            asteroid.position = self.bounds.wrap(asteroid.position);
            frame.wireframe(
                &self.asteroid_model,
                asteroid.position,
                asteroid.angle,
                asteroid.size as f32,
                Color::Red,
            );
        }

        // Bullets: move, wrap, draw, then test against every live asteroid.
        // Children spawned here are held back until the pass is over so
        // they are not hit in the frame they are born.
        let mut spawned: Vec<SpaceObject> = Vec::new();
        for bullet in &mut self.bullets {
            bullet.integrate(dt);
            bullet.position = self.bounds.wrap(bullet.position);
            frame.point(bullet.position, Color::White);

            for asteroid in &mut self.asteroids {
                if !bullet.alive || !asteroid.alive {
                    continue;
                }
                if geometry::point_in_circle(
                    asteroid.position,
                    asteroid.size as f32,
                    bullet.position,
                ) {
                    // A dead bullet cannot hit a second asteroid this pass.
                    bullet.kill();

                    if asteroid.size > self.config.min_split_size {
                        let child_size = asteroid.size >> 1;
                        for _ in 0..2 {
                            let heading = rand::thread_rng().gen_range(0.0..TAU);
                            spawned.push(SpaceObject::asteroid(
                                asteroid.position,
                                Vec2::new(heading.sin(), heading.cos()) * self.config.child_speed,
                                child_size,
                            ));
                        }
                        log::debug!("asteroid split into two size-{child_size} children");
                    } else {
                        log::debug!("asteroid destroyed");
                    }
                    asteroid.kill();
                    self.score += self.config.hit_reward;
                }
            }
        }
        self.asteroids.extend(spawned);

        // Cull bullets at the one-cell margin or marked dead, then the
        // asteroids marked dead this frame.
        let bounds = self.bounds;
        self.bullets.retain(|b| {
            b.alive
                && b.position.x >= 1.0
                && b.position.y >= 1.0
                && b.position.x < bounds.width - 1.0
                && b.position.y < bounds.height - 1.0
        });
        self.asteroids.retain(|a| a.alive);

        // Field cleared: bonus, then two fresh asteroids 90 degrees either
        // side of the player's facing. Their positions may be out of range
        // until the next frame's wrap pass.
        if self.asteroids.is_empty() {
            self.score += self.config.clear_bonus;
            self.bullets.clear();

            let angle = self.player.object.angle;
            let offset = self.config.respawn_offset;
            let speed = self.config.respawn_speed;
            let size = self.config.start_size;
            self.asteroids.push(SpaceObject::asteroid(
                Vec2::new(offset * (angle - HALF_PI).sin(), offset * (angle - HALF_PI).cos()),
                Vec2::new(speed * angle.sin(), speed * angle.cos()),
                size,
            ));
            self.asteroids.push(SpaceObject::asteroid(
                Vec2::new(offset * (angle + HALF_PI).sin(), offset * (angle + HALF_PI).cos()),
                Vec2::new(speed * (-angle).sin(), speed * (-angle).cos()),
                size,
            ));
            log::debug!("field cleared, bonus {}", self.config.clear_bonus);
        }

        // Ship over the field, score text over everything.
        frame.wireframe(
            &self.ship_model,
            self.player.object.position,
            self.player.object.angle,
            1.0,
            Color::White,
        );
        frame.text(2, 2, &format!("SCORE: {}", self.score), Color::Yellow);
    }
}

impl Application for AsteroidsGame {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        // The engine's console is authoritative for the field dimensions.
        self.bounds = WorldBounds::new(f32::from(engine.width()), f32::from(engine.height()));
        self.reset();
        log::info!(
            "Game initialized on a {}x{} field",
            engine.width(),
            engine.height()
        );
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, dt: f32) -> Result<bool, AppError> {
        let quit = engine.input().pressed(self.controls.quit);
        let input = FrameInput::from_keys(engine.input(), &self.controls);
        self.step(input, engine.canvas_mut(), dt);
        Ok(!quit)
    }

    fn cleanup(&mut self, _engine: &mut Engine) {
        log::info!("Final score: {}", self.score);
    }
}
