//! Presentation layer
//!
//! - `view_models`: plain data the screens are drawn from
//! - `presenters`: pure functions from controller state to view models
//! - `views`: ratatui widgets and console formatting over view models
//! - `renderers`: the TUI event loop and the one-shot console output

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;
