//! TUI application state
//!
//! Everything the shell needs between frames: the controller, the keypad
//! highlight, the clipboard and the backdrop. The calculator itself lives
//! entirely in the [`Controller`].

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use tracing::info;

use super::backdrop::Backdrop;
use super::input::{InputHandler, ShellAction};
use super::keypad::Keypad;
use super::ui::ScreenLayout;
use crate::clipboard::{Clipboard, MemoryClipboard};
use crate::config::ShellConfig;
use crate::core::{CalcState, Controller};

/// Ticks a pressed keypad button stays highlighted
pub const HIGHLIGHT_TICKS: u8 = 2;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp<C = MemoryClipboard> {
    controller: Controller,
    keypad: Keypad,
    input: InputHandler,
    clipboard: C,
    /// `None` when animation is disabled
    backdrop: Option<Backdrop>,
    highlight_ticks: u8,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an app with default settings and an in-memory clipboard
    #[must_use]
    pub fn new() -> Self {
        Self::with_clipboard(&ShellConfig::default(), MemoryClipboard::new())
    }
}

impl<C: Clipboard> CalculatorApp<C> {
    /// Creates an app from configuration with the given clipboard
    #[must_use]
    pub fn with_clipboard(config: &ShellConfig, clipboard: C) -> Self {
        Self {
            controller: Controller::with_panels(config.panels()),
            keypad: Keypad::new(),
            input: InputHandler::new(),
            clipboard,
            backdrop: config.animate.then(Backdrop::new),
            highlight_ticks: 0,
            should_quit: false,
        }
    }

    /// Returns the controller
    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Returns the calculator state
    #[must_use]
    pub fn state(&self) -> &CalcState {
        self.controller.state()
    }

    /// Returns the keypad with its highlight
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the clipboard
    #[must_use]
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Returns the backdrop, if animation is enabled
    #[must_use]
    pub fn backdrop(&self) -> Option<Backdrop> {
        self.backdrop
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }

    /// Performs one shell action
    pub fn handle(&mut self, action: ShellAction) {
        match action {
            ShellAction::Calculator(key) => {
                self.controller.submit(key);
                self.keypad.highlight(key);
                self.highlight_ticks = HIGHLIGHT_TICKS;
            }
            ShellAction::ToggleProgrammer => self.controller.toggle_programmer(),
            ShellAction::ToggleHistory => self.controller.toggle_history(),
            ShellAction::CopyBinary => {
                let binary = self.controller.radix().binary;
                self.clipboard.copy(&binary);
            }
            ShellAction::CopyHex => {
                let hex = self.controller.radix().hex;
                self.clipboard.copy(&hex);
            }
            ShellAction::Quit => self.quit(),
            ShellAction::None => {}
        }
    }

    /// Handles a terminal key event
    pub fn handle_key_event(&mut self, event: KeyEvent) {
        let action = self.input.handle_key(event);
        self.handle(action);
    }

    /// Handles a terminal mouse event against a frame of size `area`
    pub fn handle_mouse_event(&mut self, event: MouseEvent, area: Rect) {
        let layout = self.layout(area);
        let action = self.input.handle_mouse(event, &layout);
        self.handle(action);
    }

    /// Screen layout for a frame of size `area` with the current panels
    #[must_use]
    pub fn layout(&self, area: Rect) -> ScreenLayout {
        ScreenLayout::new(area, self.state().panels())
    }

    /// Advances the backdrop and fades the keypad highlight
    pub fn on_tick(&mut self) {
        if let Some(backdrop) = &mut self.backdrop {
            backdrop.advance();
        }
        if self.highlight_ticks > 0 {
            self.highlight_ticks -= 1;
            if self.highlight_ticks == 0 {
                self.keypad.release_all();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Key, MemoryOp, Operation};
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};

    fn press(app: &mut CalculatorApp, labels: &str) {
        for label in labels.split(' ') {
            app.handle(ShellAction::Calculator(label.parse().unwrap()));
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    // ===== Constructor tests =====

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.state().display(), "0");
        assert!(!app.should_quit());
        assert!(app.backdrop().is_some());
        assert!(app.keypad().pressed().is_none());
        assert!(app.clipboard().copies().is_empty());
    }

    #[test]
    fn test_app_from_config() {
        let config = ShellConfig::new()
            .with_programmer(true)
            .with_history(true)
            .with_animation(false);
        let app = CalculatorApp::with_clipboard(&config, MemoryClipboard::new());
        assert!(app.state().panels().programmer);
        assert!(app.state().panels().history);
        assert!(app.backdrop().is_none());
    }

    // ===== Action tests =====

    #[test]
    fn test_calculator_keys_reach_controller() {
        let mut app = CalculatorApp::new();
        press(&mut app, "7 + 3 =");
        assert_eq!(app.state().display(), "10");
        assert_eq!(app.controller().expression(), "10");
    }

    #[test]
    fn test_toggles() {
        let mut app = CalculatorApp::new();
        app.handle(ShellAction::ToggleProgrammer);
        app.handle(ShellAction::ToggleHistory);
        assert!(app.state().panels().programmer);
        assert!(app.state().panels().history);
        app.handle(ShellAction::ToggleProgrammer);
        assert!(!app.state().panels().programmer);
    }

    #[test]
    fn test_copy_binary_and_hex() {
        let mut app = CalculatorApp::new();
        press(&mut app, "2 5 5 =");
        app.handle(ShellAction::CopyBinary);
        app.handle(ShellAction::CopyHex);
        assert_eq!(app.clipboard().copies(), ["11111111", "FF"]);
    }

    #[test]
    fn test_copy_works_with_panel_hidden() {
        let mut app = CalculatorApp::new();
        press(&mut app, "1 0 =");
        app.handle(ShellAction::CopyHex);
        assert_eq!(app.clipboard().last(), Some("A"));
    }

    #[test]
    fn test_quit() {
        let mut app = CalculatorApp::new();
        app.handle(ShellAction::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_none_action_is_noop() {
        let mut app = CalculatorApp::new();
        app.handle(ShellAction::None);
        assert_eq!(app.state(), &CalcState::new());
    }

    // ===== Key event tests =====

    #[test]
    fn test_key_events() {
        let mut app = CalculatorApp::new();
        for code in [
            KeyCode::Char('6'),
            KeyCode::Char('*'),
            KeyCode::Char('7'),
            KeyCode::Enter,
        ] {
            app.handle_key_event(key(code));
        }
        assert_eq!(app.state().display(), "42");
        assert_eq!(app.state().history().lines(), vec!["6×7 = 42"]);
    }

    #[test]
    fn test_memory_shortcuts() {
        let mut app = CalculatorApp::new();
        for code in ['9', 'm', 'm', 'n'].map(KeyCode::Char) {
            app.handle_key_event(key(code));
        }
        assert_eq!(app.state().memory(), 9.0);
        app.handle_key_event(key(KeyCode::Backspace));
        app.handle_key_event(key(KeyCode::Char('r')));
        assert_eq!(app.state().display(), "9");
        app.handle_key_event(key(KeyCode::Char('z')));
        assert_eq!(app.state().memory(), 0.0);
    }

    #[test]
    fn test_escape_quits() {
        let mut app = CalculatorApp::new();
        app.handle_key_event(key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    // ===== Mouse event tests =====

    #[test]
    fn test_mouse_clicks_drive_calculator() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 80, 40);
        let keypad = app.keypad().clone();
        let layout = app.layout(area);
        for target in [
            Key::Digit(9),
            Key::Operator(Operation::Divide),
            Key::Digit(0),
            Key::Equals,
        ] {
            let index = keypad.find_button(target).unwrap();
            let rect = keypad.button_rect(layout.keypad, index).unwrap();
            app.handle_mouse_event(click(rect.x, rect.y), area);
        }
        assert_eq!(app.state().display(), "Infinity");
    }

    #[test]
    fn test_mouse_toggle_and_copy() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 80, 40);
        press(&mut app, "1 0 =");

        let toggle = app.layout(area).programmer_toggle;
        app.handle_mouse_event(click(toggle.x, toggle.y), area);
        assert!(app.state().panels().programmer);

        // the layout changed once the panel opened
        let copy = app.layout(area).copy_binary.unwrap();
        app.handle_mouse_event(click(copy.x, copy.y), area);
        assert_eq!(app.clipboard().last(), Some("1010"));
    }

    // ===== Tick tests =====

    #[test]
    fn test_highlight_fades_after_ticks() {
        let mut app = CalculatorApp::new();
        app.handle(ShellAction::Calculator(Key::Digit(5)));
        assert_eq!(app.keypad().pressed().unwrap().key, Key::Digit(5));
        app.on_tick();
        assert!(app.keypad().pressed().is_some());
        app.on_tick();
        assert!(app.keypad().pressed().is_none());
    }

    #[test]
    fn test_memory_key_has_no_highlight() {
        let mut app = CalculatorApp::new();
        app.handle(ShellAction::Calculator(Key::Memory(MemoryOp::Add)));
        assert!(app.keypad().pressed().is_none());
    }

    #[test]
    fn test_tick_advances_backdrop() {
        let mut app = CalculatorApp::new();
        app.on_tick();
        app.on_tick();
        assert_eq!(app.backdrop().unwrap().tick(), 2);
    }

    #[test]
    fn test_tick_without_animation() {
        let config = ShellConfig::new().with_animation(false);
        let mut app = CalculatorApp::with_clipboard(&config, MemoryClipboard::new());
        app.on_tick();
        assert!(app.backdrop().is_none());
    }
}
