//! Core functionality for emotiglass
//!
//! This module contains the logic shared by the CLI and the TUI:
//! - Emotion labels and capture scores
//! - Dominant emotion selection
//! - Presentation lookup (color, icon, description)
//! - Capture events tying the above together
//! - Result screen animation timelines
//! - Application configuration

pub mod aggregator;
pub mod animation;
pub mod capture;
pub mod config;
pub mod emotion;
pub mod presentation;

pub use aggregator::{dominant, ranked, DominantEmotion};
pub use capture::CaptureEvent;
pub use config::Config;
pub use emotion::{EmotionLabel, EmotionScores};
pub use presentation::{present, ColorToken, EmotionPresentation, DEFAULT_PRESENTATION};
