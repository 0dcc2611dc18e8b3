//! Emotion labels and per-capture intensity scores
//!
//! The label set is closed. Its declaration order is the canonical order used
//! everywhere a deterministic iteration is needed (tie-breaking, listings).

use serde::{Deserialize, Serialize};

use crate::error::{EmotiglassError, Result};

/// A tracked emotion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Joy,
    Contentment,
    Anger,
    Sadness,
    Fear,
    Surprise,
    Disgust,
    Neutral,
}

impl EmotionLabel {
    /// Every label, in canonical order
    pub const ALL: [EmotionLabel; 8] = [
        EmotionLabel::Joy,
        EmotionLabel::Contentment,
        EmotionLabel::Anger,
        EmotionLabel::Sadness,
        EmotionLabel::Fear,
        EmotionLabel::Surprise,
        EmotionLabel::Disgust,
        EmotionLabel::Neutral,
    ];

    /// Lowercase identifier used in JSON and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Joy => "joy",
            EmotionLabel::Contentment => "contentment",
            EmotionLabel::Anger => "anger",
            EmotionLabel::Sadness => "sadness",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Surprise => "surprise",
            EmotionLabel::Disgust => "disgust",
            EmotionLabel::Neutral => "neutral",
        }
    }

    /// Capitalized name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            EmotionLabel::Joy => "Joy",
            EmotionLabel::Contentment => "Contentment",
            EmotionLabel::Anger => "Anger",
            EmotionLabel::Sadness => "Sadness",
            EmotionLabel::Fear => "Fear",
            EmotionLabel::Surprise => "Surprise",
            EmotionLabel::Disgust => "Disgust",
            EmotionLabel::Neutral => "Neutral",
        }
    }

    /// Parse a label, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|label| label.as_str().eq_ignore_ascii_case(s))
    }

    /// Position in canonical order
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Names of the auxiliary factors, in display order
pub const AUXILIARY_NAMES: [&str; 3] = ["energy", "calmness", "tension"];

/// Emotion intensities for one capture event
///
/// Intensities are normalized to `[0, 1]`; the auxiliary factors are
/// percentages in `[0, 100]` and never take part in picking the dominant
/// emotion. Missing fields deserialize as zero and unknown keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionScores {
    pub joy: f64,
    pub contentment: f64,
    pub anger: f64,
    pub sadness: f64,
    pub fear: f64,
    pub surprise: f64,
    pub disgust: f64,
    pub neutral: f64,

    pub energy: f64,
    pub calmness: f64,
    pub tension: f64,
}

/// Auxiliary factors that accompany a capture
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AuxiliaryFactors {
    pub energy: f64,
    pub calmness: f64,
    pub tension: f64,
}

impl AuxiliaryFactors {
    /// Factors paired with their names, in display order
    pub fn entries(&self) -> [(&'static str, f64); 3] {
        [
            (AUXILIARY_NAMES[0], self.energy),
            (AUXILIARY_NAMES[1], self.calmness),
            (AUXILIARY_NAMES[2], self.tension),
        ]
    }
}

impl EmotionScores {
    /// Intensity recorded for a label
    pub fn intensity(&self, label: EmotionLabel) -> f64 {
        match label {
            EmotionLabel::Joy => self.joy,
            EmotionLabel::Contentment => self.contentment,
            EmotionLabel::Anger => self.anger,
            EmotionLabel::Sadness => self.sadness,
            EmotionLabel::Fear => self.fear,
            EmotionLabel::Surprise => self.surprise,
            EmotionLabel::Disgust => self.disgust,
            EmotionLabel::Neutral => self.neutral,
        }
    }

    /// Mutable slot for a label's intensity
    fn slot_mut(&mut self, label: EmotionLabel) -> &mut f64 {
        match label {
            EmotionLabel::Joy => &mut self.joy,
            EmotionLabel::Contentment => &mut self.contentment,
            EmotionLabel::Anger => &mut self.anger,
            EmotionLabel::Sadness => &mut self.sadness,
            EmotionLabel::Fear => &mut self.fear,
            EmotionLabel::Surprise => &mut self.surprise,
            EmotionLabel::Disgust => &mut self.disgust,
            EmotionLabel::Neutral => &mut self.neutral,
        }
    }

    /// Set a label's intensity
    pub fn set(&mut self, label: EmotionLabel, value: f64) {
        *self.slot_mut(label) = value;
    }

    /// Builder form of [`EmotionScores::set`]
    pub fn with(mut self, label: EmotionLabel, value: f64) -> Self {
        self.set(label, value);
        self
    }

    /// Set an auxiliary factor by name. Returns false for unknown names.
    pub fn set_auxiliary(&mut self, name: &str, value: f64) -> bool {
        match name.trim().to_ascii_lowercase().as_str() {
            "energy" => self.energy = value,
            "calmness" => self.calmness = value,
            "tension" => self.tension = value,
            _ => return false,
        }
        true
    }

    /// Build scores from loosely-typed `(name, value)` pairs.
    ///
    /// Emotion names and auxiliary names are matched case-insensitively;
    /// anything else is skipped. Later pairs overwrite earlier ones.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut scores = Self::default();
        for (name, value) in pairs {
            if let Some(label) = EmotionLabel::parse(name) {
                scores.set(label, value);
            } else {
                scores.set_auxiliary(name, value);
            }
        }
        scores
    }

    /// The auxiliary factors of this capture
    pub fn auxiliary(&self) -> AuxiliaryFactors {
        AuxiliaryFactors {
            energy: self.energy,
            calmness: self.calmness,
            tension: self.tension,
        }
    }

    /// Label/intensity pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (EmotionLabel, f64)> + '_ {
        EmotionLabel::ALL
            .into_iter()
            .map(move |label| (label, self.intensity(label)))
    }

    /// Strict range check.
    ///
    /// Lenient callers skip this; the aggregator already treats bad values as
    /// zero. Intensities must be finite and within `[0, 1]`, auxiliary
    /// factors within `[0, 100]`.
    pub fn validate(&self) -> Result<()> {
        for (label, value) in self.iter() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(EmotiglassError::InvalidIntensity {
                    label: label.as_str().to_string(),
                    value,
                });
            }
        }

        for (name, value) in self.auxiliary().entries() {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(EmotiglassError::InvalidAuxiliary {
                    name: name.to_string(),
                    value,
                });
            }
        }

        Ok(())
    }
}
