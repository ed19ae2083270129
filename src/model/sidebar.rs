//! Sidebar presentation state
//!
//! The sidebar has exactly two states. The icon label shown on the toggler
//! is derived from the state and never stored independently.

/// Icon-font identifier written while the sidebar is collapsed
pub const CHEVRON_RIGHT: &str = "chevron_right";

/// Icon-font identifier written while the sidebar is expanded
pub const CHEVRON_LEFT: &str = "chevron_left";

/// Collapsed/expanded state of the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    collapsed: bool,
}

impl SidebarState {
    /// Initial state: expanded
    pub fn new() -> Self {
        Self::default()
    }

    /// State matching an existing collapsed marker
    pub fn from_collapsed(collapsed: bool) -> Self {
        Self { collapsed }
    }

    /// Is the sidebar currently collapsed?
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Flip between expanded and collapsed, returning the new state
    pub fn toggle(&mut self) -> Self {
        self.collapsed = !self.collapsed;
        *self
    }

    /// Icon label for this state (see [`label_for`])
    pub fn label(&self) -> &'static str {
        label_for(*self)
    }
}

/// Project a state onto its icon label.
///
/// Collapsed points right (expand), expanded points left (collapse).
pub fn label_for(state: SidebarState) -> &'static str {
    if state.collapsed {
        CHEVRON_RIGHT
    } else {
        CHEVRON_LEFT
    }
}
