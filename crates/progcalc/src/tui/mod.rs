//! Terminal front end
//!
//! A ratatui rendering of the calculator card over an animated backdrop,
//! driven by crossterm keyboard and mouse events.

mod app;
mod backdrop;
mod input;
mod keypad;
mod ui;

pub use app::{CalculatorApp, HIGHLIGHT_TICKS};
pub use backdrop::Backdrop;
pub use input::{InputHandler, ShellAction, SHORTCUTS};
pub use keypad::{ButtonKind, Keypad, KeypadButton, KeypadWidget};
pub use ui::{render, CalculatorUI, ScreenLayout};
