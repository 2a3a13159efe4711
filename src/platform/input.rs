//! Keyboard and touch-button mapping
//!
//! Movement is level-triggered (held keys); sweep, pause and confirm are
//! edge-triggered and consumed by the next tick.

use std::collections::HashSet;

use crate::sim::{GamePhase, TickInput};

/// On-screen touch buttons (mobile layout)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Sweep,
    Pause,
    Start,
}

/// Held keys and pending one-shot presses
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<String>,
    held_buttons: HashSet<Button>,
    sweep: bool,
    pause_toggle: bool,
    confirm: bool,
    /// Demo mode flag passed through to every tick
    pub idle_mode: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key pressed (DOM `KeyboardEvent.key` names)
    pub fn key_down(&mut self, key: &str) {
        match key {
            " " | "Spacebar" => self.sweep = true,
            "p" | "P" | "Escape" => self.pause_toggle = true,
            "Enter" => self.confirm = true,
            _ => {}
        }
        self.held.insert(key.to_string());
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(key);
    }

    pub fn button_down(&mut self, button: Button) {
        match button {
            Button::Sweep => self.sweep = true,
            Button::Pause => self.pause_toggle = true,
            Button::Start => self.confirm = true,
            Button::Up | Button::Down => {}
        }
        self.held_buttons.insert(button);
    }

    pub fn button_up(&mut self, button: Button) {
        self.held_buttons.remove(&button);
    }

    /// Drop everything held (window blur: keyup events will never arrive)
    pub fn release_all(&mut self) {
        self.held.clear();
        self.held_buttons.clear();
    }

    fn is_held(&self, keys: &[&str], button: Button) -> bool {
        keys.iter().any(|k| self.held.contains(*k)) || self.held_buttons.contains(&button)
    }

    /// Commands for the next tick; one-shot presses are consumed
    ///
    /// The pause key toggles, so it becomes `pause` or `resume` depending on
    /// the phase the game is in.
    pub fn take_input(&mut self, phase: GamePhase) -> TickInput {
        let toggle = std::mem::take(&mut self.pause_toggle);
        TickInput {
            move_up: self.is_held(&["ArrowUp", "w", "W"], Button::Up),
            move_down: self.is_held(&["ArrowDown", "s", "S"], Button::Down),
            sweep: std::mem::take(&mut self.sweep),
            pause: toggle && phase == GamePhase::Playing,
            resume: toggle && phase == GamePhase::Paused,
            confirm: std::mem::take(&mut self.confirm),
            idle_mode: self.idle_mode,
        }
    }
}
