//! On-screen keypad
//!
//! ```text
//! [ C ] [ ÷ ] [ × ] [ - ]
//! [ 7 ] [ 8 ] [ 9 ] [ + ]
//! [ 4 ] [ 5 ] [ 6 ] [ = ]
//! [ 1 ] [ 2 ] [ 3 ] [ . ]
//! [     0     ]
//! ```
//!
//! Geometry comes from [`Keypad::button_rect`], which both rendering and
//! mouse hit testing use, so a click always lands on the button drawn
//! under it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Widget,
};

use crate::core::{Key, Operation};

/// Visual family of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// `C`
    Clear,
    /// Operators plus `=` and `.`
    Operator,
    /// Digits
    Digit,
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The key this button submits
    pub key: Key,
    /// Grid row
    pub row: u16,
    /// Grid column of the left edge
    pub col: u16,
    /// Number of columns covered
    pub span: u16,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    const fn new(key: Key, row: u16, col: u16) -> Self {
        Self {
            key,
            row,
            col,
            span: 1,
            pressed: false,
        }
    }

    const fn wide(mut self, span: u16) -> Self {
        self.span = span;
        self
    }

    /// The text on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.key.to_string()
    }

    /// Styling family
    #[must_use]
    pub const fn kind(&self) -> ButtonKind {
        match self.key {
            Key::Clear => ButtonKind::Clear,
            Key::Digit(_) => ButtonKind::Digit,
            _ => ButtonKind::Operator,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad: 4 columns by 5 rows, `0` two columns wide
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Number of grid columns
    pub const COLS: u16 = 4;
    /// Number of grid rows
    pub const ROWS: u16 = 5;

    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let op = Key::Operator;
        let buttons = vec![
            KeypadButton::new(Key::Clear, 0, 0),
            KeypadButton::new(op(Operation::Divide), 0, 1),
            KeypadButton::new(op(Operation::Multiply), 0, 2),
            KeypadButton::new(op(Operation::Subtract), 0, 3),
            KeypadButton::new(Key::Digit(7), 1, 0),
            KeypadButton::new(Key::Digit(8), 1, 1),
            KeypadButton::new(Key::Digit(9), 1, 2),
            KeypadButton::new(op(Operation::Add), 1, 3),
            KeypadButton::new(Key::Digit(4), 2, 0),
            KeypadButton::new(Key::Digit(5), 2, 1),
            KeypadButton::new(Key::Digit(6), 2, 2),
            KeypadButton::new(Key::Equals, 2, 3),
            KeypadButton::new(Key::Digit(1), 3, 0),
            KeypadButton::new(Key::Digit(2), 3, 1),
            KeypadButton::new(Key::Digit(3), 3, 2),
            KeypadButton::new(Key::Decimal, 3, 3),
            KeypadButton::new(Key::Digit(0), 4, 0).wide(2),
        ];
        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Finds the button that submits `key`
    #[must_use]
    pub fn find_button(&self, key: Key) -> Option<usize> {
        self.buttons.iter().position(|b| b.key == key)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button for `key`, releasing the rest.
    ///
    /// Keys without a button (memory directives) just release everything.
    pub fn highlight(&mut self, key: Key) {
        self.release_all();
        if let Some(btn) = self.find_button(key).and_then(|i| self.buttons.get_mut(i)) {
            btn.set_pressed(true);
        }
    }

    /// The highlighted button, if any
    #[must_use]
    pub fn pressed(&self) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.pressed)
    }

    /// Screen rectangle of the button at `index` inside `area`
    #[must_use]
    pub fn button_rect(&self, area: Rect, index: usize) -> Option<Rect> {
        let btn = self.buttons.get(index)?;
        let cell_width = area.width / Self::COLS;
        let cell_height = area.height / Self::ROWS;
        if cell_width == 0 || cell_height == 0 {
            return None;
        }
        Some(Rect {
            x: area.x + btn.col * cell_width,
            y: area.y + btn.row * cell_height,
            width: btn.span * cell_width,
            height: cell_height,
        })
    }

    /// Converts a click position to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        (0..self.buttons.len()).find(|&i| {
            self.button_rect(area, i)
                .is_some_and(|r| x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height)
        })
    }

    /// The key submitted by a click at (`x`, `y`)
    #[must_use]
    pub fn key_at(&self, area: Rect, x: u16, y: u16) -> Option<Key> {
        self.hit_test(area, x, y)
            .and_then(|i| self.buttons.get(i))
            .map(|b| b.key)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn style(btn: &KeypadButton) -> Style {
        if btn.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD);
        }
        match btn.kind() {
            ButtonKind::Clear => Style::default()
                .fg(Color::LightRed)
                .bg(Color::Rgb(80, 20, 20)),
            ButtonKind::Operator => Style::default()
                .fg(Color::LightCyan)
                .bg(Color::Rgb(20, 50, 60)),
            ButtonKind::Digit => Style::default()
                .fg(Color::Gray)
                .bg(Color::Rgb(30, 41, 59)),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (index, btn) in self.keypad.buttons().enumerate() {
            let Some(rect) = self.keypad.button_rect(area, index) else {
                return; // Too small to render
            };
            // One column of gap on the right of every button
            let face = Rect {
                width: rect.width.saturating_sub(1),
                ..rect
            };
            let style = Self::style(btn);
            buf.set_style(face, style);

            let label = btn.label();
            let label_x = face.x + face.width.saturating_sub(label.chars().count() as u16) / 2;
            let label_y = face.y + face.height / 2;
            buf.set_span(label_x, label_y, &Span::styled(label, style), face.width);
        }
    }
}
