//! Input management system
//!
//! Tracks per-key state with frame-edge detection. Backends feed raw
//! down/up transitions; the engine calls [`InputManager::begin_frame`] once
//! per frame so that `pressed` and `released` are single-frame edges while
//! `held` reflects the current level.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key codes understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// A printable character key
    Char(char),
}

/// State of a single key for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    /// The key is currently down
    pub held: bool,

    /// The key went down this frame (edge)
    pub pressed: bool,

    /// The key came up this frame (edge)
    pub released: bool,
}

/// Per-key input state with edge detection.
#[derive(Debug, Default)]
pub struct InputManager {
    states: HashMap<KeyCode, KeyState>,
}

impl InputManager {
    /// Create a new input manager with no keys down.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the per-frame edges. Call once at the start of each frame,
    /// before feeding this frame's events.
    pub fn begin_frame(&mut self) {
        for state in self.states.values_mut() {
            state.pressed = false;
            state.released = false;
        }
    }

    /// Record a key-down transition (or auto-repeat, which is a no-op while
    /// the key is already held).
    pub fn key_down(&mut self, key: KeyCode) {
        let state = self.states.entry(key).or_default();
        if !state.held {
            state.pressed = true;
        }
        state.held = true;
    }

    /// Record a key-up transition.
    pub fn key_up(&mut self, key: KeyCode) {
        let state = self.states.entry(key).or_default();
        if state.held {
            state.released = true;
        }
        state.held = false;
    }

    /// Full state of a key this frame.
    pub fn key(&self, key: KeyCode) -> KeyState {
        self.states.get(&key).copied().unwrap_or_default()
    }

    /// Whether the key is currently held down.
    pub fn held(&self, key: KeyCode) -> bool {
        self.key(key).held
    }

    /// Whether the key went down this frame.
    pub fn pressed(&self, key: KeyCode) -> bool {
        self.key(key).pressed
    }

    /// Whether the key came up this frame.
    pub fn released(&self, key: KeyCode) -> bool {
        self.key(key).released
    }

    /// Keys currently held down.
    pub fn held_keys(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.states
            .iter()
            .filter(|(_, state)| state.held)
            .map(|(key, _)| *key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_sets_edge_and_level() {
        let mut input = InputManager::new();
        input.begin_frame();
        input.key_down(KeyCode::Space);

        assert!(input.pressed(KeyCode::Space));
        assert!(input.held(KeyCode::Space));
        assert!(!input.released(KeyCode::Space));
    }

    #[test]
    fn test_held_persists_but_pressed_edge_clears() {
        let mut input = InputManager::new();
        input.begin_frame();
        input.key_down(KeyCode::Left);

        input.begin_frame();
        assert!(input.held(KeyCode::Left));
        assert!(!input.pressed(KeyCode::Left));
    }

    #[test]
    fn test_repeat_does_not_retrigger_pressed() {
        let mut input = InputManager::new();
        input.begin_frame();
        input.key_down(KeyCode::Up);

        input.begin_frame();
        input.key_down(KeyCode::Up); // terminal auto-repeat
        assert!(!input.pressed(KeyCode::Up));
        assert!(input.held(KeyCode::Up));
    }

    #[test]
    fn test_release_is_a_single_frame_edge() {
        let mut input = InputManager::new();
        input.begin_frame();
        input.key_down(KeyCode::Space);

        input.begin_frame();
        input.key_up(KeyCode::Space);
        assert!(input.released(KeyCode::Space));
        assert!(!input.held(KeyCode::Space));

        input.begin_frame();
        assert!(!input.released(KeyCode::Space));
    }

    #[test]
    fn test_unknown_key_is_default() {
        let input = InputManager::new();
        assert_eq!(input.key(KeyCode::Char('x')), KeyState::default());
    }
}
