//! Domain models for sidenav

mod nav;
mod sidebar;

pub use nav::{NAV_ITEMS, NavItem};
pub use sidebar::{CHEVRON_LEFT, CHEVRON_RIGHT, SidebarState, label_for};
