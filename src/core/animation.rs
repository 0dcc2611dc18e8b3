//! Cosmetic animation timelines for the result screen
//!
//! Everything here is tick-based: the TUI event loop owns the clock and
//! passes the current tick in. Each dominant emotion gets its own pulse
//! profile.

use crate::core::emotion::EmotionLabel;

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply the easing function to a progress value (clamped to 0.0..=1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Pulse parameters for one emotion
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationProfile {
    /// Ticks for one full out-and-back pulse
    pub period_ticks: u32,
    pub easing: Easing,
    /// Peak extra scale at the top of a pulse
    pub amplitude: f32,
}

impl AnimationProfile {
    /// Profile for a dominant emotion. High-arousal emotions pulse fast.
    pub fn for_emotion(label: EmotionLabel) -> Self {
        let (period_ticks, easing, amplitude) = match label {
            EmotionLabel::Joy => (12, Easing::EaseInOut, 0.25),
            EmotionLabel::Contentment => (30, Easing::EaseInOut, 0.10),
            EmotionLabel::Anger => (6, Easing::EaseIn, 0.30),
            EmotionLabel::Sadness => (40, Easing::EaseOut, 0.08),
            EmotionLabel::Fear => (8, Easing::Linear, 0.15),
            EmotionLabel::Surprise => (10, Easing::EaseOut, 0.35),
            EmotionLabel::Disgust => (20, Easing::EaseIn, 0.12),
            EmotionLabel::Neutral => (36, Easing::Linear, 0.05),
        };
        Self {
            period_ticks,
            easing,
            amplitude,
        }
    }
}

/// A running pulse animation anchored at the tick it started on
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timeline {
    pub profile: AnimationProfile,
    pub start_tick: u64,
    pub enabled: bool,
}

impl Timeline {
    pub fn new(profile: AnimationProfile, start_tick: u64, enabled: bool) -> Self {
        Self {
            profile,
            start_tick,
            enabled,
        }
    }

    /// Ticks since start; a wrapped clock counts as zero elapsed
    fn elapsed(&self, tick: u64) -> u64 {
        tick.saturating_sub(self.start_tick)
    }

    /// Eased pulse phase in 0.0..=1.0, rising then falling each period
    pub fn progress(&self, tick: u64) -> f32 {
        if !self.enabled {
            return 0.0;
        }
        let period = u64::from(self.profile.period_ticks.max(2));
        let phase = self.elapsed(tick) % period;
        let half = period as f32 / 2.0;
        let linear = if (phase as f32) < half {
            phase as f32 / half
        } else {
            (period - phase) as f32 / half
        };
        self.profile.easing.apply(linear)
    }

    /// Current pulse scale, 1.0 at rest
    pub fn scale(&self, tick: u64) -> f32 {
        1.0 + self.profile.amplitude * self.progress(tick)
    }

    /// Fraction of an entrance animation lasting `steps` ticks that has played
    pub fn reveal(&self, tick: u64, steps: u32) -> f32 {
        if !self.enabled || steps == 0 {
            return 1.0;
        }
        let t = self.elapsed(tick) as f32 / steps as f32;
        Easing::EaseOut.apply(t)
    }
}
