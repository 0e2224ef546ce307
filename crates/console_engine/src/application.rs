//! Application trait and lifecycle management

use crate::engine::{Engine, EngineError};
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to create a game using the engine. The engine is
/// passed explicitly to each callback; there is no subclassing and no
/// hidden state shared with the engine.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once after the engine is initialized, before the first frame.
    /// Use this to build models and set up initial game state.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called once per frame. Read input, advance the simulation, and draw
    /// into the canvas here.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `dt` - Time since last frame in seconds
    ///
    /// # Returns
    /// `Ok(true)` to keep running, `Ok(false)` to stop the main loop.
    fn update(&mut self, engine: &mut Engine, dt: f32) -> Result<bool, AppError>;

    /// Cleanup the application
    ///
    /// Called when the main loop exits, before the backend shuts down.
    fn cleanup(&mut self, _engine: &mut Engine) {}
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),
}
