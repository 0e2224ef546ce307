//! End-to-end gameplay scenarios driven through the public step API.

use asteroids::{AsteroidsGame, FrameInput, GameConfig};
use console_engine::canvas::Canvas;

const DT: f32 = 1.0 / 60.0;

fn new_game() -> (AsteroidsGame, Canvas) {
    let config = GameConfig::default();
    let canvas = Canvas::new(config.console.width, config.console.height);
    (AsteroidsGame::new(&config), canvas)
}

#[test]
fn test_first_hit_splits_an_asteroid_and_scores() {
    let (mut game, mut canvas) = new_game();

    // Aim: two frames holding right turns the ship 0.55 rad clockwise,
    // lining the shot up with the right-hand starting asteroid.
    let aim = FrameInput {
        right: true,
        ..FrameInput::default()
    };
    game.step(aim, &mut canvas, 0.055);
    game.step(aim, &mut canvas, 0.055);

    let fire = FrameInput {
        fire: true,
        ..FrameInput::default()
    };
    game.step(fire, &mut canvas, DT);
    assert_eq!(game.bullets().len(), 1);

    // Let the bullet fly. It reaches the asteroid's circle well within
    // four simulated seconds.
    let mut frames = 0;
    while game.score() == 0 && frames < 240 {
        game.step(FrameInput::default(), &mut canvas, DT);
        frames += 1;
    }

    assert_eq!(game.score(), 100, "bullet never connected");
    assert!(!game.player().dead);
    assert!(game.bullets().is_empty());

    let mut sizes: Vec<u32> = game.asteroids().iter().map(|a| a.size).collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![8, 8, 16]);
}

#[test]
fn test_idle_simulation_keeps_asteroids_in_bounds() {
    let (mut game, mut canvas) = new_game();
    let config = GameConfig::default();
    let (w, h) = (
        f32::from(config.console.width),
        f32::from(config.console.height),
    );

    // Ten idle seconds: nothing fires, so the field always holds exactly
    // the two seed asteroids, wrapped inside the world on both axes.
    for _ in 0..600 {
        game.step(FrameInput::default(), &mut canvas, DT);
        assert_eq!(game.asteroids().len(), 2);
        for asteroid in game.asteroids() {
            assert!((0.0..w).contains(&asteroid.position.x));
            assert!((0.0..h).contains(&asteroid.position.y));
        }
    }
}
