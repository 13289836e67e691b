//! Keyboard and mouse input handling
//!
//! Calculator keys go through [`map_key_name`] so the terminal honours the
//! same mapping as any other front end; whatever it leaves unmapped may be
//! a shell shortcut.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::ui::ScreenLayout;
use crate::core::keymap::map_key_name;
use crate::core::{Key, MemoryOp};

/// Actions the shell can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    /// Submit a key to the controller
    Calculator(Key),
    /// Show or hide the programmer panel
    ToggleProgrammer,
    /// Show or hide the history panel
    ToggleHistory,
    /// Copy the binary readout
    CopyBinary,
    /// Copy the hex readout
    CopyHex,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Shell shortcuts and their descriptions, for the help footer
pub const SHORTCUTS: &[(&str, &str)] = &[
    ("p", "programmer"),
    ("h", "history"),
    ("b/x", "copy"),
    ("m/n", "M+/M-"),
    ("r", "MR"),
    ("z", "MC"),
    ("q", "quit"),
];

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> ShellAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return ShellAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c') => ShellAction::Quit,
                _ => ShellAction::None,
            };
        }

        if let Some(key) = key_name(code).as_deref().and_then(map_key_name) {
            return ShellAction::Calculator(key);
        }

        match code {
            KeyCode::Esc => ShellAction::Quit,
            KeyCode::Char(c) => Self::shortcut(c),
            _ => ShellAction::None,
        }
    }

    /// Maps a mouse event to an action using the current screen layout
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent, layout: &ScreenLayout) -> ShellAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => layout.hit(event.column, event.row),
            _ => ShellAction::None,
        }
    }

    /// Maps a shortcut character to an action
    #[must_use]
    pub fn shortcut(c: char) -> ShellAction {
        match c.to_ascii_lowercase() {
            'p' => ShellAction::ToggleProgrammer,
            'h' => ShellAction::ToggleHistory,
            'b' => ShellAction::CopyBinary,
            'x' => ShellAction::CopyHex,
            'm' => ShellAction::Calculator(Key::Memory(MemoryOp::Add)),
            'n' => ShellAction::Calculator(Key::Memory(MemoryOp::Subtract)),
            'r' => ShellAction::Calculator(Key::Memory(MemoryOp::Recall)),
            'z' => ShellAction::Calculator(Key::Memory(MemoryOp::Clear)),
            'q' => ShellAction::Quit,
            _ => ShellAction::None,
        }
    }

    /// The key event that produces `key`, the inverse of [`InputHandler::handle_key`]
    #[must_use]
    pub fn key_event_for(key: Key) -> KeyEvent {
        let code = match key {
            Key::Digit(d) => KeyCode::Char(char::from(b'0' + d)),
            Key::Decimal => KeyCode::Char('.'),
            Key::Operator(op) => KeyCode::Char(op.ascii()),
            Key::Equals => KeyCode::Enter,
            Key::Clear => KeyCode::Backspace,
            Key::Memory(MemoryOp::Add) => KeyCode::Char('m'),
            Key::Memory(MemoryOp::Subtract) => KeyCode::Char('n'),
            Key::Memory(MemoryOp::Recall) => KeyCode::Char('r'),
            Key::Memory(MemoryOp::Clear) => KeyCode::Char('z'),
        };
        KeyEvent::new(code, KeyModifiers::NONE)
    }
}

/// DOM-style name of a crossterm key code
fn key_name(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Enter => Some("Enter".to_string()),
        KeyCode::Backspace => Some("Backspace".to_string()),
        KeyCode::Char(c) => Some(c.to_string()),
        _ => None,
    }
}
