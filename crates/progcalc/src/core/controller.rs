//! Session owner of the current [`CalcState`]

use tracing::debug;

use crate::core::{CalcState, Key, Panels, RadixView};

/// Holds the live calculator state and feeds keys through the
/// transition table.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    state: CalcState,
}

impl Controller {
    /// Fresh calculator with both panels hidden
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh calculator with the given panels open
    #[must_use]
    pub fn with_panels(panels: Panels) -> Self {
        Self {
            state: CalcState::with_panels(panels),
        }
    }

    /// Applies one key and returns the resulting state
    pub fn submit(&mut self, key: Key) -> &CalcState {
        let (next, failure) = self.state.step(key);
        if let Some(err) = failure {
            debug!(expression = self.state.expression(), error = %err, "evaluation failed");
        }
        debug!(
            key = %key,
            expression = next.expression(),
            display = next.display(),
            "key applied"
        );
        self.state = next;
        &self.state
    }

    /// Applies each key in order
    pub fn submit_all(&mut self, keys: impl IntoIterator<Item = Key>) -> &CalcState {
        for key in keys {
            self.submit(key);
        }
        &self.state
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Shows or hides the programmer panel
    pub fn toggle_programmer(&mut self) {
        let panels = self.state.panels().toggle_programmer();
        debug!(programmer = panels.programmer, "panel toggled");
        self.state = self.state.with_panels_set(panels);
    }

    /// Shows or hides the history panel
    pub fn toggle_history(&mut self) {
        let panels = self.state.panels().toggle_history();
        debug!(history = panels.history, "panel toggled");
        self.state = self.state.with_panels_set(panels);
    }

    /// Display readout
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Expression readout
    #[must_use]
    pub fn expression(&self) -> &str {
        self.state.expression()
    }

    /// Binary/hex view of the display
    #[must_use]
    pub fn radix(&self) -> RadixView {
        self.state.radix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MemoryOp, Operation};

    #[test]
    fn test_new_controller() {
        let controller = Controller::new();
        assert_eq!(controller.display(), "0");
        assert_eq!(controller.expression(), "");
        assert_eq!(controller.state().panels(), Panels::default());
    }

    #[test]
    fn test_submit_returns_new_state() {
        let mut controller = Controller::new();
        let state = controller.submit(Key::Digit(8));
        assert_eq!(state.display(), "8");
        assert_eq!(controller.expression(), "8");
    }

    #[test]
    fn test_submit_all() {
        let mut controller = Controller::new();
        controller.submit_all([
            Key::Digit(6),
            Key::Operator(Operation::Multiply),
            Key::Digit(7),
            Key::Equals,
        ]);
        assert_eq!(controller.display(), "42");
        assert_eq!(controller.state().history().lines(), vec!["6×7 = 42"]);
    }

    #[test]
    fn test_submit_failure_shows_error() {
        let mut controller = Controller::new();
        controller.submit_all([Key::Digit(1), Key::Operator(Operation::Add), Key::Equals]);
        assert_eq!(controller.display(), "Error");
        assert_eq!(controller.expression(), "");
    }

    #[test]
    fn test_toggle_panels() {
        let mut controller = Controller::new();
        controller.toggle_programmer();
        assert!(controller.state().panels().programmer);
        controller.toggle_history();
        assert!(controller.state().panels().history);
        controller.toggle_programmer();
        assert!(!controller.state().panels().programmer);
    }

    #[test]
    fn test_toggle_keeps_calculation() {
        let mut controller = Controller::new();
        controller.submit_all([Key::Digit(3), Key::Memory(MemoryOp::Add)]);
        controller.toggle_history();
        assert_eq!(controller.display(), "3");
        assert_eq!(controller.state().memory(), 3.0);
    }

    #[test]
    fn test_with_panels() {
        let controller = Controller::with_panels(Panels {
            programmer: true,
            history: false,
        });
        assert!(controller.state().panels().programmer);
    }

    #[test]
    fn test_radix() {
        let mut controller = Controller::new();
        controller.submit_all([Key::Digit(2), Key::Digit(5), Key::Digit(5), Key::Equals]);
        assert_eq!(controller.radix().hex, "FF");
    }
}
