//! TUI (Text User Interface) module
//!
//! Terminal-based viewer built on ratatui/crossterm. Rendering functions take
//! plain state so they can be exercised with ratatui's `TestBackend`.

pub mod app;
pub mod input;
pub mod ui;
pub mod viewer_app;

pub use app::{App, KeyResult};
pub use viewer_app::{run_viewer, ViewerApp, ViewerState};
