//! Analyze CLI command handler

use std::fs;
use std::io::{self, Read};

use crate::cli::commands::AnalyzeArgs;
use crate::core::capture::CaptureEvent;
use crate::core::config::{Config, OutputFormat};
use crate::core::emotion::{EmotionLabel, EmotionScores};
use crate::core::presentation::intensity_bar;
use crate::error::{EmotiglassError, Result};

/// Width of breakdown bars in text output
const BAR_WIDTH: usize = 20;

/// Handle the analyze command
pub fn handle_analyze(args: AnalyzeArgs, config: &Config) -> Result<()> {
    let scores = read_scores(&args)?;

    if args.strict {
        scores.validate()?;
    }

    let capture = CaptureEvent::new(scores);
    tracing::info!(
        dominant = %capture.dominant.label,
        intensity = capture.dominant.intensity,
        "analyzed capture"
    );

    let format = args
        .format
        .map(|f| f.to_output_format())
        .unwrap_or(config.default_format);

    match format {
        OutputFormat::Text => print!("{}", format_capture(&capture)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&capture)?),
    }

    Ok(())
}

/// Resolve the score source from the arguments
fn read_scores(args: &AnalyzeArgs) -> Result<EmotionScores> {
    if let Some(json) = &args.json {
        tracing::debug!("reading scores from --json");
        return parse_json(json);
    }

    if let Some(path) = &args.file {
        tracing::debug!(path = %path.display(), "reading scores from file");
        let contents = fs::read_to_string(path)?;
        return parse_json(&contents);
    }

    if !args.pairs.is_empty() {
        tracing::debug!(count = args.pairs.len(), "reading scores from pairs");
        return parse_pairs(&args.pairs, args.strict);
    }

    tracing::debug!("reading scores from stdin");
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    parse_json(&input)
}

/// Parse a JSON object of scores. Blank input counts as an empty capture.
pub fn parse_json(input: &str) -> Result<EmotionScores> {
    if input.trim().is_empty() {
        return Ok(EmotionScores::default());
    }
    Ok(serde_json::from_str(input)?)
}

/// Parse `label=value` (or `label:value`) pairs.
///
/// Unknown names are skipped with a warning, or rejected in strict mode.
pub fn parse_pairs(pairs: &[String], strict: bool) -> Result<EmotionScores> {
    let mut scores = EmotionScores::default();

    for pair in pairs {
        let (name, raw) = pair
            .split_once('=')
            .or_else(|| pair.split_once(':'))
            .ok_or_else(|| {
                EmotiglassError::InvalidInput(format!(
                    "Expected label=value, got '{}'.\n\n  → Example: emotiglass analyze joy=0.8 sadness=0.1",
                    pair
                ))
            })?;

        let value: f64 = raw.trim().parse().map_err(|_| {
            EmotiglassError::InvalidInput(format!(
                "'{}' is not a number (in '{}').",
                raw.trim(),
                pair
            ))
        })?;

        if let Some(label) = EmotionLabel::parse(name) {
            scores.set(label, value);
        } else if !scores.set_auxiliary(name, value) {
            if strict {
                return Err(EmotiglassError::InvalidInput(format!(
                    "Unknown emotion '{}'.\n\n  → Run 'emotiglass labels' to see tracked emotions.",
                    name.trim()
                )));
            }
            tracing::warn!(name = name.trim(), "ignoring unknown emotion");
        }
    }

    Ok(scores)
}

/// Text rendering of a capture
pub fn format_capture(capture: &CaptureEvent) -> String {
    let entry = capture.presentation_entry();
    let mut out = String::new();

    out.push_str(&format!(
        "{} {} ({}%)\n",
        entry.glyph(),
        capture.dominant.label.display_name(),
        capture.dominant.percent()
    ));
    out.push_str(&format!("  {}\n", entry.description));
    out.push_str(&format!(
        "  color: {} {}   icon: {}\n",
        entry.color.as_str(),
        entry.color.hex(),
        entry.icon
    ));

    out.push_str("\nBreakdown:\n");
    for item in &capture.ranked {
        out.push_str(&format!(
            "  {:<12} {} {:.2}\n",
            item.label.as_str(),
            intensity_bar(item.intensity, BAR_WIDTH),
            item.intensity
        ));
    }

    out.push('\n');
    let factors: Vec<String> = capture
        .auxiliary
        .entries()
        .iter()
        .map(|(name, value)| format!("{} {:.0}", name, value))
        .collect();
    out.push_str(&format!("  {}\n", factors.join(" │ ")));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_pairs() {
        let scores = parse_pairs(&strings(&["joy=0.8", "Sadness:0.1", "energy=60"]), false).unwrap();
        assert_eq!(scores.joy, 0.8);
        assert_eq!(scores.sadness, 0.1);
        assert_eq!(scores.energy, 60.0);
    }

    #[test]
    fn test_parse_pairs_unknown_name() {
        let pairs = strings(&["boredom=0.9", "fear=0.2"]);
        let scores = parse_pairs(&pairs, false).unwrap();
        assert_eq!(scores.fear, 0.2);

        assert!(matches!(
            parse_pairs(&pairs, true),
            Err(EmotiglassError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_pairs_bad_syntax() {
        assert!(parse_pairs(&strings(&["joy"]), false).is_err());
        assert!(parse_pairs(&strings(&["joy=lots"]), false).is_err());
    }

    #[test]
    fn test_parse_json_blank_is_empty() {
        assert_eq!(parse_json("  \n").unwrap(), EmotionScores::default());
        assert!(matches!(
            parse_json("{joy: 1}"),
            Err(EmotiglassError::Json(_))
        ));
    }

    #[test]
    fn test_format_capture() {
        let scores = parse_json(r#"{"joy": 0.8, "sadness": 0.1, "energy": 65}"#).unwrap();
        let text = format_capture(&CaptureEvent::new(scores));
        assert!(text.starts_with("☺ Joy (80%)"));
        assert!(text.contains("happiness"));
        assert!(text.contains("#FFD700"));
        assert!(text.contains("energy 65"));
        let joy_line = text.lines().find(|l| l.trim_start().starts_with("joy")).unwrap();
        assert!(joy_line.ends_with("0.80"));
    }
}
