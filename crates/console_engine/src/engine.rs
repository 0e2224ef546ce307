//! Core engine implementation

use crate::{
    application::{AppError, Application},
    backend::{Backend, TerminalBackend},
    canvas::Canvas,
    input::InputManager,
    time::Timer,
};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Main engine struct
///
/// Owns the frame buffer, input state, and frame timing, and drives the
/// per-frame [`Application`] callbacks.
pub struct Engine {
    canvas: Canvas,
    input: InputManager,
    timer: Timer,
    config: EngineConfig,
    running: bool,
}

impl Engine {
    /// Create a new engine instance without a backend attached.
    pub fn new(config: EngineConfig) -> Self {
        log::info!(
            "Initializing engine: {}x{} cells, target {} fps",
            config.width,
            config.height,
            config.target_fps
        );
        Self {
            canvas: Canvas::new(config.width, config.height),
            input: InputManager::new(),
            timer: Timer::new(),
            config,
            running: true,
        }
    }

    /// Run the main loop with the given application on the terminal backend.
    pub fn run<T: Application>(config: EngineConfig, app: &mut T) -> Result<(), EngineError> {
        let backend = TerminalBackend::new(&config)?;
        Self::run_with_backend(config, backend, app)
    }

    /// Run the main loop with an explicit backend.
    ///
    /// Useful for headless runs and tests; `run` is the terminal-backed
    /// convenience wrapper.
    pub fn run_with_backend<T: Application, B: Backend>(
        config: EngineConfig,
        mut backend: B,
        app: &mut T,
    ) -> Result<(), EngineError> {
        let frame_budget = if config.target_fps > 0 {
            Some(Duration::from_secs_f64(1.0 / f64::from(config.target_fps)))
        } else {
            None
        };
        let mut engine = Self::new(config);

        app.initialize(&mut engine)
            .map_err(|e| EngineError::Application(format!("initialization failed: {e}")))?;

        log::info!("Starting main loop");

        while engine.running {
            let frame_start = Instant::now();
            engine.timer.update();
            let dt = engine.timer.delta_time();

            engine.input.begin_frame();
            backend.poll_events(&mut engine.input)?;

            let keep_running = app
                .update(&mut engine, dt)
                .map_err(|e| EngineError::Application(format!("update failed: {e}")))?;
            if !keep_running {
                engine.running = false;
            }

            backend.present(&engine.canvas)?;

            if let Some(budget) = frame_budget {
                let elapsed = frame_start.elapsed();
                if elapsed < budget {
                    std::thread::sleep(budget - elapsed);
                }
            }
        }

        app.cleanup(&mut engine);
        backend.shutdown()?;

        log::info!(
            "Engine shutdown complete after {} frames ({:.1} fps average)",
            engine.timer.frame_count(),
            engine.timer.average_fps()
        );
        Ok(())
    }

    /// Get the frame buffer
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Get mutable access to the frame buffer
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Get the input manager
    pub fn input(&self) -> &InputManager {
        &self.input
    }

    /// Screen width in cells (fixed for the session)
    pub fn width(&self) -> u16 {
        self.canvas.width()
    }

    /// Screen height in cells (fixed for the session)
    pub fn height(&self) -> u16 {
        self.canvas.height()
    }

    /// Get the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Window/terminal title
    pub title: String,

    /// Console width in cells
    pub width: u16,

    /// Console height in cells
    pub height: u16,

    /// Frame-rate cap; 0 disables pacing
    pub target_fps: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "Console Engine Application".to_string(),
            width: 160,
            height: 100,
            target_fps: 60,
        }
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Terminal backend I/O failure
    #[error("Backend error: {0}")]
    Backend(#[from] std::io::Error),

    /// The terminal is smaller than the configured console
    #[error("Terminal too small: need {need_width}x{need_height}, have {have_width}x{have_height}")]
    TerminalTooSmall {
        /// Required width in cells
        need_width: u16,
        /// Required height in cells
        need_height: u16,
        /// Available width in cells
        have_width: u16,
        /// Available height in cells
        have_height: u16,
    },

    /// Application error surfaced from a lifecycle callback
    #[error("Application error: {0}")]
    Application(String),
}
