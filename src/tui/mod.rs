//! Terminal User Interface module
//!
//! This module contains the ratatui-based TUI: the capture screen, the
//! animated result screen and settings.

pub mod app;
pub mod event;
pub mod screens;
pub mod theme;
pub mod ui;

pub use app::App;
