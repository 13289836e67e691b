//! Keyboard mapping from DOM-style key names to calculator keys
//!
//! Only the keys the calculator understands are mapped. Everything else
//! returns `None` and is left to the shell, which may claim it as a
//! shortcut.

use crate::core::{Key, Operation};

/// Maps a key name such as `"Enter"`, `"Backspace"`, `"7"` or `"*"`.
#[must_use]
pub fn map_key_name(name: &str) -> Option<Key> {
    match name {
        "Enter" => Some(Key::Equals),
        "Backspace" => Some(Key::Clear),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => map_char(c),
                _ => None,
            }
        }
    }
}

/// Maps a typed character. `×`, `÷`, `=` and `C` are not keyboard keys.
#[must_use]
pub fn map_char(c: char) -> Option<Key> {
    match c {
        '0'..='9' => Key::digit(c as u8 - b'0'),
        '.' => Some(Key::Decimal),
        '+' => Some(Key::Operator(Operation::Add)),
        '-' => Some(Key::Operator(Operation::Subtract)),
        '*' => Some(Key::Operator(Operation::Multiply)),
        '/' => Some(Key::Operator(Operation::Divide)),
        _ => None,
    }
}
