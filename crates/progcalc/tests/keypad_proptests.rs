//! Property-based tests for keypad geometry and screen hit-testing
//!
//! Rendering and mouse input share one layout; these properties check that
//! every button is reachable and that no two targets overlap.

#![cfg(feature = "tui")]

use proptest::prelude::*;
use progcalc::core::Panels;
use progcalc::tui::{Keypad, ScreenLayout, ShellAction};
use ratatui::layout::Rect;

// ===== Strategy definitions =====

/// Generate a keypad area large enough for one cell per column and row
fn keypad_area_strategy() -> impl Strategy<Value = Rect> {
    (0u16..100, 0u16..100, 4u16..200, 5u16..100)
        .prop_map(|(x, y, width, height)| Rect::new(x, y, width, height))
}

/// Generate a terminal size that fits the card with both panels open
fn screen_strategy() -> impl Strategy<Value = Rect> {
    (40u16..240, 26u16..90).prop_map(|(width, height)| Rect::new(0, 0, width, height))
}

/// Generate any panel visibility
fn panels_strategy() -> impl Strategy<Value = Panels> {
    (any::<bool>(), any::<bool>()).prop_map(|(programmer, history)| Panels {
        programmer,
        history,
    })
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

// ===== Keypad geometry properties =====

proptest! {
    /// Every cell of every button resolves back to that button
    #[test]
    fn prop_button_cells_hit_their_button(area in keypad_area_strategy()) {
        let keypad = Keypad::new();
        for index in 0..keypad.button_count() {
            let rect = keypad.button_rect(area, index).unwrap();
            let key = keypad.get_button(index).unwrap().key;
            prop_assert_eq!(keypad.key_at(area, rect.x, rect.y), Some(key));
            let (right, bottom) = (rect.x + rect.width - 1, rect.y + rect.height - 1);
            prop_assert_eq!(keypad.key_at(area, right, bottom), Some(key));
        }
    }

    /// Button rectangles never overlap and stay inside the keypad area
    #[test]
    fn prop_buttons_disjoint(area in keypad_area_strategy()) {
        let keypad = Keypad::new();
        let rects: Vec<Rect> = (0..keypad.button_count())
            .map(|i| keypad.button_rect(area, i).unwrap())
            .collect();
        for (i, a) in rects.iter().enumerate() {
            prop_assert!(area.union(*a) == area, "{:?} outside {:?}", a, area);
            for b in &rects[i + 1..] {
                prop_assert!(!a.intersects(*b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    /// Points outside the keypad area hit nothing
    #[test]
    fn prop_outside_misses(area in keypad_area_strategy(), dx in 0u16..50, dy in 0u16..50) {
        let keypad = Keypad::new();
        prop_assert_eq!(keypad.hit_test(area, area.x + area.width + dx, area.y + dy), None);
        prop_assert_eq!(keypad.hit_test(area, area.x + dx, area.y + area.height + dy), None);
    }

    /// Too small an area yields no geometry instead of zero-sized buttons
    #[test]
    fn prop_degenerate_area(width in 0u16..4, height in 0u16..5) {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, width, height);
        prop_assert_eq!(keypad.button_rect(area, 0), None);
        prop_assert_eq!(keypad.hit_test(area, 0, 0), None);
    }
}

// ===== Screen layout properties =====

proptest! {
    /// The card stays on screen and holds every region
    #[test]
    fn prop_layout_within_card(area in screen_strategy(), panels in panels_strategy()) {
        let layout = ScreenLayout::new(area, panels);
        prop_assert!(area.union(layout.card) == area);
        for region in [
            layout.expression,
            layout.display,
            layout.keypad,
            layout.programmer_toggle,
            layout.history_toggle,
        ] {
            prop_assert!(layout.card.union(region) == layout.card, "{:?}", region);
        }
        prop_assert_eq!(layout.keypad.height, Keypad::ROWS);
        prop_assert_eq!(layout.programmer.is_some(), panels.programmer);
        prop_assert_eq!(layout.copy_binary.is_some(), panels.programmer);
        prop_assert_eq!(layout.history.is_some(), panels.history);
    }

    /// Clicking any keypad button through the layout submits its key
    #[test]
    fn prop_layout_clicks_reach_keypad(area in screen_strategy(), panels in panels_strategy()) {
        let layout = ScreenLayout::new(area, panels);
        let keypad = Keypad::new();
        for button in keypad.buttons() {
            let index = keypad.find_button(button.key).unwrap();
            let rect = keypad.button_rect(layout.keypad, index).unwrap();
            prop_assert_eq!(layout.hit(rect.x, rect.y), ShellAction::Calculator(button.key));
        }
    }

    /// Toggles and copy buttons resolve to their own actions
    #[test]
    fn prop_layout_controls(area in screen_strategy(), panels in panels_strategy()) {
        let layout = ScreenLayout::new(area, panels);
        let toggle = layout.programmer_toggle;
        prop_assert_eq!(layout.hit(toggle.x, toggle.y), ShellAction::ToggleProgrammer);
        let toggle = layout.history_toggle;
        prop_assert_eq!(layout.hit(toggle.x, toggle.y), ShellAction::ToggleHistory);
        if let (Some(binary), Some(hex)) = (layout.copy_binary, layout.copy_hex) {
            prop_assert_eq!(layout.hit(binary.x, binary.y), ShellAction::CopyBinary);
            prop_assert_eq!(layout.hit(hex.x, hex.y), ShellAction::CopyHex);
        }
    }

    /// Clicks outside the card never act
    #[test]
    fn prop_layout_outside_card(area in screen_strategy(), panels in panels_strategy(), y in 0u16..90) {
        let layout = ScreenLayout::new(area, panels);
        prop_assume!(layout.card.x > 0);
        prop_assume!(y < area.height);
        prop_assert!(!contains(layout.card, 0, y));
        prop_assert_eq!(layout.hit(0, y), ShellAction::None);
    }
}
