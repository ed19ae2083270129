//! Navigation entries listed in the sidebar

/// A single sidebar navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Title shown when the sidebar is expanded
    pub title: &'static str,
}

impl NavItem {
    const fn new(title: &'static str) -> Self {
        Self { title }
    }
}

/// Site sections, in display order
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem::new("Home"),
    NavItem::new("Chat"),
    NavItem::new("Mood"),
    NavItem::new("Resources"),
    NavItem::new("Admin tools"),
];
