//! Keybinding definitions for sidenav
//!
//! All keybindings are defined here so they can be changed in one place.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Global keys
// =============================================================================

/// Quit application
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Alternative quit
pub const ESC: KeyCode = KeyCode::Esc;

/// Activate the sidebar toggler
pub const TOGGLE_SIDEBAR: KeyCode = KeyCode::Char('[');

/// Check if key is Ctrl+C
/// Note: Accept both 'c' and 'C' for terminal compatibility
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key activates the sidebar toggler (`[` or Ctrl+B)
pub fn is_toggle_key(key: &KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('b') | KeyCode::Char('B'));
    }
    key.code == TOGGLE_SIDEBAR
}

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_TOGGLE: KeyHint = KeyHint {
    key: "[",
    label: "Sidebar",
    color: Color::Cyan,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};

/// Hints shown when the sidebar toggler is bound
pub const TOGGLER_HINTS: &[KeyHint] = &[HINT_TOGGLE, HINT_QUIT];

/// Hints shown for a page without a toggler
pub const STATIC_HINTS: &[KeyHint] = &[HINT_QUIT];

/// Hints for the current page
pub fn current_hints(has_toggler: bool) -> &'static [KeyHint] {
    if has_toggler {
        TOGGLER_HINTS
    } else {
        STATIC_HINTS
    }
}
