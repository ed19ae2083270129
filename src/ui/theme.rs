//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the sidebar
pub mod sidebar {
    use super::*;

    /// Border color
    pub const BORDER: Color = Color::DarkGray;
    /// Toggler glyph color
    pub const TOGGLER: Color = Color::Cyan;
    /// Nav entry text color
    pub const NAV_ITEM: Color = Color::Reset;
    /// Nav bullet color
    pub const NAV_BULLET: Color = Color::Blue;
}

/// Colors for the content pane
pub mod content {
    use super::*;

    /// Title color
    pub const TITLE: Color = Color::Yellow;
}
