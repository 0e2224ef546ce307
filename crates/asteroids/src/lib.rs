//! Asteroids rendered to a character-cell console buffer.
//!
//! The crate is a thin layering over [`console_engine`]: plain entity
//! records ([`entity`]), toroidal world geometry ([`world`], [`geometry`]),
//! the wire-frame models ([`models`]), a wrapping draw view ([`render`]),
//! and the per-frame simulation step ([`game`]), which is the only place
//! where behavior is non-obvious. All tunables live in [`config`].

pub mod config;
pub mod entity;
pub mod game;
pub mod geometry;
pub mod models;
pub mod render;
pub mod world;

pub use config::GameConfig;
pub use game::{AsteroidsGame, FrameInput};
