//! Dominant emotion selection

use serde::{Deserialize, Serialize};

use crate::core::emotion::{EmotionLabel, EmotionScores};

/// The winning emotion of a capture and its intensity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DominantEmotion {
    pub label: EmotionLabel,
    pub intensity: f64,
}

impl DominantEmotion {
    /// Result used when no emotion registers at all
    pub const NEUTRAL: DominantEmotion = DominantEmotion {
        label: EmotionLabel::Neutral,
        intensity: 0.0,
    };

    /// Intensity as a whole percentage, clamped to 0..=100
    pub fn percent(&self) -> u8 {
        if !self.intensity.is_finite() {
            return 0;
        }
        (self.intensity * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

impl Default for DominantEmotion {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Pick the dominant emotion.
///
/// Walks the labels in canonical order and keeps the first one with the
/// strictly greatest intensity above zero. Ties go to the earlier label.
/// When nothing is above zero the result is `(neutral, 0)`. Negative and
/// non-finite intensities never win.
pub fn dominant(scores: EmotionScores) -> DominantEmotion {
    let mut best = DominantEmotion::NEUTRAL;
    for (label, intensity) in scores.iter() {
        if intensity.is_finite() && intensity > best.intensity {
            best = DominantEmotion { label, intensity };
        }
    }
    best
}

/// Every label ordered by descending intensity.
///
/// Equal intensities keep canonical order. Non-finite values sort as zero.
pub fn ranked(scores: EmotionScores) -> Vec<DominantEmotion> {
    let mut all: Vec<DominantEmotion> = scores
        .iter()
        .map(|(label, intensity)| DominantEmotion {
            label,
            intensity: if intensity.is_finite() { intensity } else { 0.0 },
        })
        .collect();

    // sort_by is stable, so canonical order survives among equals
    all.sort_by(|a, b| b.intensity.total_cmp(&a.intensity));
    all
}
