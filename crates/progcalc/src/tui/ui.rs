//! Screen layout and rendering
//!
//! [`ScreenLayout`] is the single source of screen geometry. Rendering
//! draws into its regions and mouse clicks are resolved against the same
//! regions, so the two can never disagree.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::backdrop::Backdrop;
use super::input::{ShellAction, SHORTCUTS};
use super::keypad::{Keypad, KeypadWidget};
use crate::clipboard::Clipboard;
use crate::core::{CalcState, Panels};

/// Outer width of the calculator card
pub const CARD_WIDTH: u16 = 40;
/// Rows used by the display readout (bordered)
pub const DISPLAY_HEIGHT: u16 = 3;
/// Rows used by the programmer panel (bordered, three lines)
pub const PROGRAMMER_HEIGHT: u16 = 5;
/// Rows used by the history panel at most (bordered, ten entries)
pub const HISTORY_HEIGHT: u16 = 12;
/// The copy button label
pub const COPY_LABEL: &str = "[Copy]";

/// Card title
pub const TITLE: &str = " progcalc ";
/// Shown in the history panel before the first evaluation
pub const EMPTY_HISTORY: &str = "No history yet";
/// Shown under the radix readout when the display has a fraction
pub const FRACTION_NOTE: &str = "*Fractional part truncated in binary/hex";

const CARD_BG: Color = Color::Rgb(2, 6, 23);
const PANEL_BG: Color = Color::Rgb(30, 41, 59);
const ACCENT: Color = Color::Cyan;

/// Rows from the top border to the history toggle, inclusive of both
/// card borders, with no optional panel open
const FIXED_ROWS: u16 = 2 + 1 + DISPLAY_HEIGHT + Keypad::ROWS + 1 + 2;

/// Where everything sits on screen for a given terminal size and panel set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// The bordered calculator card
    pub card: Rect,
    /// Expression readout
    pub expression: Rect,
    /// Display readout (bordered)
    pub display: Rect,
    /// Keypad grid
    pub keypad: Rect,
    /// "Show/Hide Programmer Mode" button
    pub programmer_toggle: Rect,
    /// Programmer panel, when open
    pub programmer: Option<Rect>,
    /// Copy button on the binary line, when the programmer panel is open
    pub copy_binary: Option<Rect>,
    /// Copy button on the hex line, when the programmer panel is open
    pub copy_hex: Option<Rect>,
    /// "Show/Hide History" button
    pub history_toggle: Rect,
    /// History panel, when open
    pub history: Option<Rect>,
    /// Help footer on the last terminal row
    pub help: Rect,
}

impl ScreenLayout {
    /// Lays out the screen
    #[must_use]
    pub fn new(area: Rect, panels: Panels) -> Self {
        let help = Rect {
            y: area.y + area.height.saturating_sub(1),
            height: area.height.min(1),
            ..area
        };
        let body_height = area.height.saturating_sub(1);

        let fixed = FIXED_ROWS + if panels.programmer { PROGRAMMER_HEIGHT } else { 0 };
        let history_height = if panels.history {
            HISTORY_HEIGHT.min(body_height.saturating_sub(fixed))
        } else {
            0
        };

        let card_width = CARD_WIDTH.min(area.width);
        let card_height = (fixed + history_height).min(body_height);
        let card = Rect {
            x: area.x + (area.width - card_width) / 2,
            y: area.y + (body_height - card_height) / 2,
            width: card_width,
            height: card_height,
        };
        let inner = Rect {
            x: card.x + 1,
            y: card.y + 1,
            width: card.width.saturating_sub(2),
            height: card.height.saturating_sub(2),
        };

        let mut y = inner.y;
        let mut row = |height: u16| {
            let rect = Rect {
                y,
                height,
                ..inner
            }
            .intersection(inner);
            y += height;
            rect
        };

        let expression = row(1);
        let display = row(DISPLAY_HEIGHT);
        let keypad = row(Keypad::ROWS);
        row(1);
        let programmer_toggle = row(1);
        let programmer = panels.programmer.then(|| row(PROGRAMMER_HEIGHT));
        let history_toggle = row(1);
        let history = panels.history.then(|| row(history_height));

        let copy_button = |line: u16| {
            programmer.map(|panel| {
                let width = COPY_LABEL.len() as u16;
                Rect {
                    x: (panel.x + panel.width).saturating_sub(1 + width),
                    y: panel.y + line,
                    width,
                    height: 1,
                }
                .intersection(panel)
            })
        };

        Self {
            card,
            expression,
            display,
            keypad,
            programmer_toggle,
            programmer,
            copy_binary: copy_button(1),
            copy_hex: copy_button(2),
            history_toggle,
            history,
            help,
        }
    }

    /// Resolves a click at (`x`, `y`)
    #[must_use]
    pub fn hit(&self, x: u16, y: u16) -> ShellAction {
        if let Some(key) = Keypad::new().key_at(self.keypad, x, y) {
            return ShellAction::Calculator(key);
        }
        let targets = [
            (Some(self.programmer_toggle), ShellAction::ToggleProgrammer),
            (Some(self.history_toggle), ShellAction::ToggleHistory),
            (self.copy_binary, ShellAction::CopyBinary),
            (self.copy_hex, ShellAction::CopyHex),
        ];
        targets
            .into_iter()
            .find(|(rect, _)| rect.is_some_and(|r| contains(r, x, y)))
            .map_or(ShellAction::None, |(_, action)| action)
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Keeps the last `width` characters, marking a cut with `…`
fn tail(text: &str, width: u16) -> String {
    let width = usize::from(width);
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let kept: String = text.chars().skip(len - (width - 1)).collect();
    format!("…{kept}")
}

/// Renders the calculator to the frame
pub fn render<C: Clipboard>(app: &CalculatorApp<C>, frame: &mut Frame) {
    let area = frame.area();
    let ui = CalculatorUI::new(app.state(), app.keypad()).with_backdrop(app.backdrop());
    frame.render_widget(ui, area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    state: &'a CalcState,
    keypad: &'a Keypad,
    backdrop: Option<Backdrop>,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget without a backdrop
    #[must_use]
    pub fn new(state: &'a CalcState, keypad: &'a Keypad) -> Self {
        Self {
            state,
            keypad,
            backdrop: None,
        }
    }

    /// Draws `backdrop` behind the card
    #[must_use]
    pub fn with_backdrop(mut self, backdrop: Option<Backdrop>) -> Self {
        self.backdrop = backdrop;
        self
    }

    fn render_expression(&self, area: Rect, buf: &mut Buffer) {
        let expression = self.state.expression();
        let text = if expression.is_empty() { "0" } else { expression };
        Paragraph::new(Span::styled(
            tail(text, area.width),
            Style::default().fg(Color::LightCyan),
        ))
        .alignment(Alignment::Right)
        .render(area, buf);
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.state.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .style(Style::default().bg(PANEL_BG));
        let width = block.inner(area).width;
        Paragraph::new(Span::styled(tail(self.state.display(), width), style))
            .alignment(Alignment::Right)
            .block(block)
            .render(area, buf);
    }

    fn render_toggle(label: &str, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            format!("[ {label} ]"),
            Style::default().fg(Color::LightCyan).bg(PANEL_BG),
        ))
        .alignment(Alignment::Center)
        .render(area, buf);
    }

    fn render_programmer(&self, area: Rect, layout: &ScreenLayout, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let radix = self.state.radix();
        let copy_width = COPY_LABEL.len() as u16 + 1;
        let label = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let value = Style::default().fg(Color::Cyan);

        let lines = [("Binary: ", radix.binary.as_str()), ("Hex: ", radix.hex.as_str())];
        for (offset, (name, digits)) in (0u16..).zip(lines) {
            let room = inner
                .width
                .saturating_sub(name.len() as u16 + copy_width);
            let line = Line::from(vec![
                Span::styled(name, label),
                Span::styled(tail(digits, room), value),
            ]);
            let rect = Rect {
                y: inner.y + offset,
                height: 1,
                ..inner
            }
            .intersection(inner);
            Paragraph::new(line).render(rect, buf);
        }

        let button = Style::default().fg(Color::Black).bg(Color::Cyan);
        for rect in [layout.copy_binary, layout.copy_hex].into_iter().flatten() {
            Paragraph::new(Span::styled(COPY_LABEL, button)).render(rect, buf);
        }

        if radix.fraction_truncated {
            let rect = Rect {
                y: inner.y + 2,
                height: 1,
                ..inner
            }
            .intersection(inner);
            Paragraph::new(Span::styled(FRACTION_NOTE, Style::default().fg(Color::Gray)))
                .render(rect, buf);
        }
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .style(Style::default().bg(PANEL_BG));
        let history = self.state.history();
        let lines: Vec<Line> = if history.is_empty() {
            vec![Line::from(Span::styled(
                EMPTY_HISTORY,
                Style::default().fg(Color::Gray),
            ))]
        } else {
            history
                .lines()
                .into_iter()
                .map(|entry| Line::from(Span::styled(entry, Style::default().fg(Color::LightCyan))))
                .collect()
        };
        Paragraph::new(lines).block(block).render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let key = Style::default().fg(Color::Yellow);
        let desc = Style::default().fg(Color::Gray);
        let mut spans = vec![
            Span::styled("Enter", key),
            Span::styled(" = ", desc),
            Span::styled("Bksp", key),
            Span::styled(" C ", desc),
        ];
        for (k, d) in SHORTCUTS {
            spans.push(Span::styled(*k, key));
            spans.push(Span::styled(format!(" {d} "), desc));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(backdrop) = self.backdrop {
            backdrop.render(area, buf);
        }

        let panels = self.state.panels();
        let layout = ScreenLayout::new(area, panels);

        Clear.render(layout.card, buf);
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .style(Style::default().bg(CARD_BG))
            .render(layout.card, buf);

        self.render_expression(layout.expression, buf);
        self.render_display(layout.display, buf);
        KeypadWidget::new(self.keypad).render(layout.keypad, buf);

        let programmer_label = if panels.programmer {
            "Hide Programmer Mode"
        } else {
            "Show Programmer Mode"
        };
        Self::render_toggle(programmer_label, layout.programmer_toggle, buf);
        if let Some(area) = layout.programmer {
            self.render_programmer(area, &layout, buf);
        }

        let history_label = if panels.history {
            "Hide History"
        } else {
            "Show History"
        };
        Self::render_toggle(history_label, layout.history_toggle, buf);
        if let Some(area) = layout.history {
            self.render_history(area, buf);
        }

        Self::render_help(layout.help, buf);
    }
}
