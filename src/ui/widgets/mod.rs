//! Reusable UI widgets

mod error_banner;
mod placeholder;
mod sidebar;
mod status_bar;

pub use error_banner::render_error_banner;
pub use placeholder::render_placeholder;
pub use sidebar::{COLLAPSED_WIDTH, render_sidebar, sidebar_width};
pub use status_bar::{build_status_bar, render_status_bar, status_bar_area};
