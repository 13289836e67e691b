//! The calculator state record and its transition table
//!
//! [`CalcState`] is a value. Every key produces a fresh state through
//! [`CalcState::apply`]; nothing is mutated in place, which keeps the
//! whole decision table testable without a shell.

use crate::core::evaluator::Evaluator;
use crate::core::history::History;
use crate::core::number::{format_number, parse_lenient};
use crate::core::{CalcError, Key, MemoryOp, Operation, RadixView};

/// Display text shown after a failed evaluation
pub const ERROR_DISPLAY: &str = "Error";

/// Display text of a fresh or cleared calculator
pub const INITIAL_DISPLAY: &str = "0";

/// Which optional panels the shell shows. Never affects calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Panels {
    /// Binary/hex readout
    pub programmer: bool,
    /// Recent calculations
    pub history: bool,
}

impl Panels {
    /// Flips the programmer panel
    #[must_use]
    pub const fn toggle_programmer(self) -> Self {
        Self {
            programmer: !self.programmer,
            ..self
        }
    }

    /// Flips the history panel
    #[must_use]
    pub const fn toggle_history(self) -> Self {
        Self {
            history: !self.history,
            ..self
        }
    }
}

/// Complete calculator state
#[derive(Debug, Clone, PartialEq)]
pub struct CalcState {
    expression: String,
    display: String,
    memory: f64,
    history: History,
    panels: Panels,
}

impl Default for CalcState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcState {
    /// Empty expression, display `0`, memory `0`, no history
    #[must_use]
    pub fn new() -> Self {
        Self {
            expression: String::new(),
            display: INITIAL_DISPLAY.to_string(),
            memory: 0.0,
            history: History::new(),
            panels: Panels::default(),
        }
    }

    /// Same as [`CalcState::new`] with the given panels open
    #[must_use]
    pub fn with_panels(panels: Panels) -> Self {
        Self {
            panels,
            ..Self::new()
        }
    }

    /// The expression being built
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The display readout
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The memory register
    #[must_use]
    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Completed calculations, newest first
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Panel visibility
    #[must_use]
    pub fn panels(&self) -> Panels {
        self.panels
    }

    /// True when the display shows the failure marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// Binary/hex view derived from the display
    #[must_use]
    pub fn radix(&self) -> RadixView {
        RadixView::from_display(&self.display)
    }

    /// Returns the state after pressing `key`.
    #[must_use]
    pub fn apply(&self, key: Key) -> Self {
        self.step(key).0
    }

    /// Like [`CalcState::apply`], also reporting why an `=` failed.
    #[must_use]
    pub fn step(&self, key: Key) -> (Self, Option<CalcError>) {
        let mut next = self.clone();

        match key {
            Key::Clear => {
                next.expression.clear();
                next.display = INITIAL_DISPLAY.to_string();
            }
            Key::Equals => return self.evaluate(),
            Key::Memory(MemoryOp::Add) => next.memory += parse_lenient(&self.display),
            Key::Memory(MemoryOp::Subtract) => next.memory -= parse_lenient(&self.display),
            Key::Memory(MemoryOp::Recall) => {
                let recalled = format_number(self.memory);
                next.expression.clone_from(&recalled);
                next.display = recalled;
            }
            Key::Memory(MemoryOp::Clear) => next.memory = 0.0,
            Key::Operator(_) if self.expression.is_empty() => {}
            Key::Operator(op) if self.ends_with_operator() => {
                next.expression.pop();
                next.expression.push(op.glyph());
                next.display = key.to_string();
            }
            Key::Decimal if self.current_operand().contains('.') => {}
            Key::Digit(_) | Key::Decimal | Key::Operator(_) => {
                let label = key.to_string();
                next.expression.push_str(&label);
                next.display = label;
            }
        }

        (next, None)
    }

    /// Returns a copy with the given panels
    #[must_use]
    pub fn with_panels_set(&self, panels: Panels) -> Self {
        Self {
            panels,
            ..self.clone()
        }
    }

    fn evaluate(&self) -> (Self, Option<CalcError>) {
        let mut next = self.clone();
        match Evaluator::new().evaluate_expression(&self.expression) {
            Ok(result) => {
                let formatted = format_number(result);
                next.history.record(&self.expression, result);
                next.expression.clone_from(&formatted);
                next.display = formatted;
                (next, None)
            }
            Err(err) => {
                next.expression.clear();
                next.display = ERROR_DISPLAY.to_string();
                (next, Some(err))
            }
        }
    }

    fn ends_with_operator(&self) -> bool {
        self.expression.chars().last().is_some_and(Operation::is_glyph)
    }

    /// The text after the last operator
    fn current_operand(&self) -> &str {
        self.expression
            .rsplit(Operation::is_glyph)
            .next()
            .unwrap_or_default()
    }
}
