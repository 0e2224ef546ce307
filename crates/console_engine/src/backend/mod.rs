//! Presentation backends
//!
//! A [`Backend`] is the seam between the engine loop and the outside
//! world: it feeds raw key transitions into the input manager and blits
//! the finished canvas somewhere visible. The terminal backend is the
//! normal choice; the headless backend exists for tests and scripted runs.

use crate::{canvas::Canvas, engine::EngineError, input::InputManager};

mod terminal;

pub use terminal::TerminalBackend;

/// Presentation and event-polling backend for the engine loop.
pub trait Backend {
    /// Poll pending key events and feed them into the input manager.
    fn poll_events(&mut self, input: &mut InputManager) -> Result<(), EngineError>;

    /// Present the finished frame.
    fn present(&mut self, canvas: &Canvas) -> Result<(), EngineError>;

    /// Release any resources held by the backend (terminal modes etc).
    fn shutdown(&mut self) -> Result<(), EngineError>;
}

/// A backend that discards every frame and reports no input.
///
/// Lets the full engine loop run in tests and benchmarks without a
/// terminal attached.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    frames: u64,
    /// Stop the loop after this many frames (0 = run forever)
    pub max_frames: u64,
}

impl HeadlessBackend {
    /// Create a headless backend that stops the loop after `max_frames`.
    pub fn new(max_frames: u64) -> Self {
        Self {
            frames: 0,
            max_frames,
        }
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Backend for HeadlessBackend {
    fn poll_events(&mut self, input: &mut InputManager) -> Result<(), EngineError> {
        if self.max_frames > 0 && self.frames >= self.max_frames {
            // Signal shutdown through the standard quit key.
            input.key_down(crate::input::KeyCode::Escape);
        }
        Ok(())
    }

    fn present(&mut self, _canvas: &Canvas) -> Result<(), EngineError> {
        self.frames += 1;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), EngineError> {
        Ok(())
    }
}
