//! # Console Engine
//!
//! A small game engine that renders to a character-cell console buffer.
//!
//! The engine owns the frame buffer ([`Canvas`]), keyboard state
//! ([`input::InputManager`]), and the main loop. A game implements the
//! [`Application`] trait and receives the engine once per frame with the
//! elapsed time; it reads key state, mutates its own state, and issues draw
//! calls through the canvas primitives. Presentation goes through a
//! [`backend::Backend`], normally the crossterm terminal backend.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use console_engine::prelude::*;
//!
//! struct MyGame;
//!
//! impl Application for MyGame {
//!     fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, _dt: f32) -> Result<bool, AppError> {
//!         engine.canvas_mut().clear();
//!         engine.canvas_mut().draw_string(2, 2, "Hello", Color::White);
//!         Ok(!engine.input().pressed(KeyCode::Escape))
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut game = MyGame;
//!     Engine::run(EngineConfig::default(), &mut game)?;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod canvas;
pub mod input;
pub mod math;
pub mod time;

mod application;
mod engine;

pub use application::{AppError, Application};
pub use engine::{Engine, EngineConfig, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        canvas::{Canvas, Color},
        input::{InputManager, KeyCode, KeyState},
        math::Vec2,
        time::Timer,
        AppError, Application, Engine, EngineConfig, EngineError,
    };
}
