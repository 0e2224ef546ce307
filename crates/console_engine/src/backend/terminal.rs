//! Crossterm-backed terminal presentation
//!
//! Puts the terminal into raw mode on an alternate screen and blits the
//! canvas as a full frame each present. Key release edges come from the
//! kitty keyboard enhancement protocol where the terminal supports it;
//! elsewhere a short hold-decay window synthesizes the release after
//! auto-repeat stops, which is the best a legacy terminal can report.

use crate::{
    canvas::{Canvas, Color},
    engine::{EngineConfig, EngineError},
    input::{InputManager, KeyCode},
};
use crossterm::{
    cursor, event, execute, queue,
    style::{self, Print, SetForegroundColor},
    terminal,
};
use std::collections::HashMap;
use std::io::{BufWriter, Stdout, Write};
use std::time::{Duration, Instant};

/// How long a key counts as held after its last press/repeat event when the
/// terminal cannot report releases.
const HOLD_DECAY: Duration = Duration::from_millis(150);

/// Terminal backend using crossterm.
pub struct TerminalBackend {
    out: BufWriter<Stdout>,
    reports_releases: bool,
    /// Last press/repeat instant per key, for hold-decay release synthesis.
    last_seen: HashMap<KeyCode, Instant>,
    active: bool,
}

impl TerminalBackend {
    /// Take over the terminal for the given console dimensions.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let (have_width, have_height) = terminal::size()?;
        if have_width < config.width || have_height < config.height {
            return Err(EngineError::TerminalTooSmall {
                need_width: config.width,
                need_height: config.height,
                have_width,
                have_height,
            });
        }

        let reports_releases = terminal::supports_keyboard_enhancement().unwrap_or(false);

        let mut out = BufWriter::new(std::io::stdout());
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            terminal::SetTitle(&config.title),
            cursor::Hide,
        )?;
        if reports_releases {
            execute!(
                out,
                event::PushKeyboardEnhancementFlags(
                    event::KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                )
            )?;
        }
        log::info!(
            "Terminal backend ready ({}x{}, release reporting: {})",
            config.width,
            config.height,
            reports_releases
        );

        Ok(Self {
            out,
            reports_releases,
            last_seen: HashMap::new(),
            active: true,
        })
    }

    fn map_key(code: event::KeyCode) -> Option<KeyCode> {
        match code {
            event::KeyCode::Up => Some(KeyCode::Up),
            event::KeyCode::Down => Some(KeyCode::Down),
            event::KeyCode::Left => Some(KeyCode::Left),
            event::KeyCode::Right => Some(KeyCode::Right),
            event::KeyCode::Enter => Some(KeyCode::Enter),
            event::KeyCode::Esc => Some(KeyCode::Escape),
            event::KeyCode::Char(' ') => Some(KeyCode::Space),
            event::KeyCode::Char(c) => Some(KeyCode::Char(c.to_ascii_lowercase())),
            _ => None,
        }
    }

    fn map_color(color: Color) -> style::Color {
        match color {
            Color::Black => style::Color::Black,
            Color::White => style::Color::White,
            Color::Red => style::Color::Red,
            Color::Green => style::Color::Green,
            Color::Blue => style::Color::Blue,
            Color::Yellow => style::Color::Yellow,
            Color::Cyan => style::Color::Cyan,
            Color::Magenta => style::Color::Magenta,
        }
    }

    fn restore(&mut self) -> Result<(), EngineError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        if self.reports_releases {
            execute!(self.out, event::PopKeyboardEnhancementFlags)?;
        }
        execute!(
            self.out,
            cursor::Show,
            terminal::LeaveAlternateScreen,
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl super::Backend for TerminalBackend {
    fn poll_events(&mut self, input: &mut InputManager) -> Result<(), EngineError> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                event::Event::Key(key) => {
                    let Some(code) = Self::map_key(key.code) else {
                        continue;
                    };
                    match key.kind {
                        event::KeyEventKind::Press | event::KeyEventKind::Repeat => {
                            input.key_down(code);
                            self.last_seen.insert(code, Instant::now());
                        }
                        event::KeyEventKind::Release => {
                            input.key_up(code);
                            self.last_seen.remove(&code);
                        }
                    }
                }
                _ => {}
            }
        }

        if !self.reports_releases {
            // No release events from this terminal; expire stale holds.
            let now = Instant::now();
            let expired: Vec<KeyCode> = self
                .last_seen
                .iter()
                .filter(|(_, seen)| now.duration_since(**seen) > HOLD_DECAY)
                .map(|(key, _)| *key)
                .collect();
            for key in expired {
                input.key_up(key);
                self.last_seen.remove(&key);
            }
        }
        Ok(())
    }

    fn present(&mut self, canvas: &Canvas) -> Result<(), EngineError> {
        queue!(self.out, cursor::MoveTo(0, 0))?;
        let mut current = Color::White;
        queue!(self.out, SetForegroundColor(Self::map_color(current)))?;

        for y in 0..canvas.height() {
            queue!(self.out, cursor::MoveTo(0, y))?;
            let mut run = String::with_capacity(usize::from(canvas.width()));
            for x in 0..canvas.width() {
                let cell = canvas
                    .cell(i32::from(x), i32::from(y))
                    .copied()
                    .unwrap_or(crate::canvas::Cell::BLANK);
                if cell.color != current && cell.glyph != ' ' {
                    if !run.is_empty() {
                        queue!(self.out, Print(std::mem::take(&mut run)))?;
                    }
                    current = cell.color;
                    queue!(self.out, SetForegroundColor(Self::map_color(current)))?;
                }
                run.push(cell.glyph);
            }
            queue!(self.out, Print(run))?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), EngineError> {
        log::info!("Terminal backend shutting down");
        self.restore()
    }
}

impl Drop for TerminalBackend {
    fn drop(&mut self) {
        // Best effort; the terminal must come back even on panic unwind.
        let _ = self.restore();
    }
}
