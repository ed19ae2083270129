//! UI layer
//!
//! Contains the view tree, components, widgets, symbols, and theme definitions.

pub mod components;
pub mod symbols;
pub mod theme;
pub mod tree;
pub mod widgets;
