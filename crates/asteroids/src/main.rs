//! Asteroids binary entry point.

use asteroids::{AsteroidsGame, GameConfig};
use console_engine::Engine;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = GameConfig::load_or_default(Path::new("asteroids.toml"));
    let mut game = AsteroidsGame::new(&config);

    Engine::run(config.engine_config(), &mut game)?;
    Ok(())
}
