//! TUI screens
//!
//! Each screen renders into the content area between header and status bar.

pub mod capture;
pub mod result;
pub mod settings;
