//! Terminal UI layer for the vitals monitor.
//!
//! Provides themes, the header and banner components, the live session view,
//! and the main application event loop built on top of [`ratatui`] for
//! rendering the vitals dashboard in the terminal.

pub mod app;
pub mod components;
pub mod session_view;
pub mod themes;

pub use vitals_core as core;
