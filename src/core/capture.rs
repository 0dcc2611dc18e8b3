//! Capture events
//!
//! A capture bundles one set of scores with everything derived from it, so
//! the shell runs the aggregator and the presentation lookup exactly once
//! per user interaction.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::aggregator::{self, DominantEmotion};
use crate::core::emotion::{AuxiliaryFactors, EmotionScores};
use crate::core::presentation::EmotionPresentation;

/// One analyzed capture
#[derive(Debug, Clone, Serialize)]
pub struct CaptureEvent {
    pub captured_at: DateTime<Utc>,
    #[serde(skip)]
    pub scores: EmotionScores,
    pub dominant: DominantEmotion,
    pub presentation: PresentationView,
    pub ranked: Vec<DominantEmotion>,
    pub auxiliary: AuxiliaryFactors,
}

/// Serializable presentation with the resolved hex color alongside the token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationView {
    pub color: &'static str,
    pub hex: String,
    pub icon: &'static str,
    pub description: &'static str,
}

impl From<EmotionPresentation> for PresentationView {
    fn from(p: EmotionPresentation) -> Self {
        Self {
            color: p.color.as_str(),
            hex: p.color.hex(),
            icon: p.icon,
            description: p.description,
        }
    }
}

impl CaptureEvent {
    /// Analyze scores captured now
    pub fn new(scores: EmotionScores) -> Self {
        Self::at(scores, Utc::now())
    }

    /// Analyze scores captured at a given time
    pub fn at(scores: EmotionScores, captured_at: DateTime<Utc>) -> Self {
        let dominant = aggregator::dominant(scores);
        let presentation = dominant.label.presentation();

        Self {
            captured_at,
            scores,
            dominant,
            presentation: presentation.into(),
            ranked: aggregator::ranked(scores),
            auxiliary: scores.auxiliary(),
        }
    }

    /// Typed presentation entry for the dominant emotion
    pub fn presentation_entry(&self) -> EmotionPresentation {
        self.dominant.label.presentation()
    }
}
