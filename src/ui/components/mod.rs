//! Reusable UI components
//!
//! Stateful controls bound to the view tree, and message building blocks.

pub mod message;
pub mod sidebar_toggler;

pub use message::*;
pub use sidebar_toggler::{BindError, SidebarToggler};
