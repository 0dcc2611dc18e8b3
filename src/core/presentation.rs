//! Presentation table: color, icon and description for each emotion

use serde::Serialize;

use crate::core::emotion::EmotionLabel;

/// Display color token
///
/// Tokens are resolved to concrete colors by the renderer; `hex()` gives the
/// reference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Joy,
    Contentment,
    Anger,
    Sadness,
    Fear,
    Surprise,
    Disgust,
    Neutral,
    /// App accent, used for anything without its own color
    Primary,
}

impl ColorToken {
    /// Reference RGB value
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorToken::Joy => (0xFF, 0xD7, 0x00),
            ColorToken::Contentment => (0x7F, 0xD1, 0xAE),
            ColorToken::Anger => (0xFF, 0x4D, 0x4D),
            ColorToken::Sadness => (0x4A, 0x90, 0xE2),
            ColorToken::Fear => (0x9B, 0x59, 0xB6),
            ColorToken::Surprise => (0xFF, 0x9F, 0x43),
            ColorToken::Disgust => (0x6A, 0xB0, 0x4C),
            ColorToken::Neutral => (0xA0, 0xA4, 0xAB),
            ColorToken::Primary => (0x6C, 0x63, 0xFF),
        }
    }

    /// `#RRGGBB` form of [`ColorToken::rgb`]
    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Joy => "joy",
            ColorToken::Contentment => "contentment",
            ColorToken::Anger => "anger",
            ColorToken::Sadness => "sadness",
            ColorToken::Fear => "fear",
            ColorToken::Surprise => "surprise",
            ColorToken::Disgust => "disgust",
            ColorToken::Neutral => "neutral",
            ColorToken::Primary => "primary",
        }
    }
}

/// How an emotion is shown: color, icon and a short description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmotionPresentation {
    pub color: ColorToken,
    pub icon: &'static str,
    pub description: &'static str,
}

/// Entry for labels outside the tracked set
pub const DEFAULT_PRESENTATION: EmotionPresentation = EmotionPresentation {
    color: ColorToken::Primary,
    icon: "help-circle",
    description: "Your emotions appear balanced, with no single feeling standing out.",
};

impl EmotionPresentation {
    /// Terminal glyph for the icon token
    pub fn glyph(&self) -> &'static str {
        match self.icon {
            "happy" => "☺",
            "leaf" => "❀",
            "flame" => "✹",
            "sad" => "☂",
            "alert-circle" => "⚠",
            "flash" => "✦",
            "thumbs-down" => "✖",
            "remove-circle" => "●",
            _ => "?",
        }
    }
}

impl EmotionLabel {
    /// Presentation entry for this label
    pub fn presentation(&self) -> EmotionPresentation {
        match self {
            EmotionLabel::Joy => EmotionPresentation {
                color: ColorToken::Joy,
                icon: "happy",
                description: "You're radiating happiness and positive energy.",
            },
            EmotionLabel::Contentment => EmotionPresentation {
                color: ColorToken::Contentment,
                icon: "leaf",
                description: "You feel at peace and satisfied with how things are.",
            },
            EmotionLabel::Anger => EmotionPresentation {
                color: ColorToken::Anger,
                icon: "flame",
                description: "Something is frustrating you. Take a breath before you act.",
            },
            EmotionLabel::Sadness => EmotionPresentation {
                color: ColorToken::Sadness,
                icon: "sad",
                description: "You're feeling down. Be gentle with yourself today.",
            },
            EmotionLabel::Fear => EmotionPresentation {
                color: ColorToken::Fear,
                icon: "alert-circle",
                description: "You're feeling anxious or uneasy about what lies ahead.",
            },
            EmotionLabel::Surprise => EmotionPresentation {
                color: ColorToken::Surprise,
                icon: "flash",
                description: "Something unexpected caught your attention.",
            },
            EmotionLabel::Disgust => EmotionPresentation {
                color: ColorToken::Disgust,
                icon: "thumbs-down",
                description: "Something doesn't sit right with you.",
            },
            EmotionLabel::Neutral => EmotionPresentation {
                color: ColorToken::Neutral,
                icon: "remove-circle",
                description: "You're calm and even, neither up nor down.",
            },
        }
    }
}

/// Look up the presentation for a label name.
///
/// Never fails: names outside the tracked set get [`DEFAULT_PRESENTATION`].
pub fn present(label: &str) -> EmotionPresentation {
    EmotionLabel::parse(label)
        .map(|l| l.presentation())
        .unwrap_or(DEFAULT_PRESENTATION)
}

/// Fixed-width text bar for an intensity in 0..1
pub fn intensity_bar(intensity: f64, width: usize) -> String {
    let clamped = if intensity.is_finite() {
        intensity.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (clamped * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joy_entry() {
        let p = present("joy");
        assert_eq!(p.color, ColorToken::Joy);
        assert_eq!(p.color.hex(), "#FFD700");
        assert_eq!(p.icon, "happy");
        assert!(p.description.contains("happiness"));
    }

    #[test]
    fn test_unknown_label_gets_default() {
        assert_eq!(present("unknown_label"), DEFAULT_PRESENTATION);
        assert_eq!(present(""), DEFAULT_PRESENTATION);
        assert_eq!(present("🙂🙂"), DEFAULT_PRESENTATION);
        assert_eq!(DEFAULT_PRESENTATION.color, ColorToken::Primary);
        assert_eq!(DEFAULT_PRESENTATION.icon, "help-circle");
    }

    #[test]
    fn test_every_label_has_distinct_entry() {
        for label in EmotionLabel::ALL {
            let p = present(label.as_str());
            assert_ne!(p, DEFAULT_PRESENTATION, "{} fell back to default", label);
            assert!(!p.description.is_empty());
            assert_ne!(p.glyph(), "?");
            assert_eq!(p.color.as_str(), label.as_str());
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(present("  FEAR"), EmotionLabel::Fear.presentation());
    }

    #[test]
    fn test_garbage_input_is_total() {
        for input in ["joy!", "null", "0.5", "neutral neutral", "\n"] {
            let p = present(input);
            assert!(!p.description.is_empty());
            assert!(!p.icon.is_empty());
            assert!(p.color.hex().starts_with('#'));
        }
    }

    #[test]
    fn test_intensity_bar() {
        assert_eq!(intensity_bar(0.5, 4), "██░░");
        assert_eq!(intensity_bar(2.0, 3), "███");
        assert_eq!(intensity_bar(-1.0, 3), "░░░");
        assert_eq!(intensity_bar(f64::NAN, 2), "░░");
    }
}
