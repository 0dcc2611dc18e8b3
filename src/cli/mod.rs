//! CLI module for emotiglass
//!
//! This module contains all CLI command definitions and handlers using clap.

pub mod analyze;
pub mod commands;
pub mod config;
pub mod present;

pub use commands::{Cli, Commands};
