//! UI rendering tests using ratatui's TestBackend
//!
//! Snapshots are inline (insta) and cover the sidebar column only, so
//! content-pane text wrapping does not affect them.
//! Reference: https://ratatui.rs/recipes/testing/snapshots/

#[path = "ui/test_sidebar.rs"]
mod test_sidebar;

#[path = "ui/test_status.rs"]
mod test_status;
