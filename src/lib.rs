//! sidenav - terminal page with a collapsible sidebar
//!
//! This library provides:
//! - [`app`]: Application state and event handling
//! - [`config`]: Environment-driven configuration
//! - [`keys`]: Key binding definitions
//! - [`logging`]: File-backed tracing setup
//! - [`model`]: Sidebar state and navigation entries
//! - [`ui`]: View tree, sidebar toggler component, and widgets

pub mod app;
pub mod config;
pub mod keys;
pub mod logging;
pub mod model;
pub mod ui;
