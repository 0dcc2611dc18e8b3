//! emotiglass - mood tracking in the terminal
//!
//! This library provides the emotion core (dominant emotion selection and
//! its presentation) plus the CLI and TUI shells that consume it.

pub mod cli;
pub mod core;
pub mod error;
pub mod tui;

pub use error::{EmotiglassError, Result};
