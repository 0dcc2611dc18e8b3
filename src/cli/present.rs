//! Present and labels CLI command handlers

use serde::Serialize;

use crate::cli::commands::{LabelsArgs, PresentArgs};
use crate::core::capture::PresentationView;
use crate::core::config::{Config, OutputFormat};
use crate::core::emotion::EmotionLabel;
use crate::core::presentation::{present, EmotionPresentation};
use crate::error::Result;

/// One row of `emotiglass labels --format json`
#[derive(Debug, Serialize)]
struct LabelRow {
    label: EmotionLabel,
    #[serde(flatten)]
    presentation: PresentationView,
}

/// Handle the present command
pub fn handle_present(args: PresentArgs, config: &Config) -> Result<()> {
    let entry = present(&args.label);
    if EmotionLabel::parse(&args.label).is_none() {
        tracing::debug!(label = %args.label, "unknown label, showing default entry");
    }

    let format = args
        .format
        .map(|f| f.to_output_format())
        .unwrap_or(config.default_format);

    match format {
        OutputFormat::Text => print!("{}", format_presentation(&entry)),
        OutputFormat::Json => {
            let view = PresentationView::from(entry);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    Ok(())
}

/// Handle the labels command
pub fn handle_labels(args: LabelsArgs, config: &Config) -> Result<()> {
    let format = args
        .format
        .map(|f| f.to_output_format())
        .unwrap_or(config.default_format);

    match format {
        OutputFormat::Text => {
            for label in EmotionLabel::ALL {
                let entry = label.presentation();
                println!(
                    "{} {:<12} {:<14} {}",
                    entry.glyph(),
                    label.as_str(),
                    entry.icon,
                    entry.color.hex()
                );
            }
        }
        OutputFormat::Json => {
            let rows: Vec<LabelRow> = EmotionLabel::ALL
                .iter()
                .map(|&label| LabelRow {
                    label,
                    presentation: label.presentation().into(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}

/// Text rendering of a presentation entry
pub fn format_presentation(entry: &EmotionPresentation) -> String {
    format!(
        "{} {}\n  color: {} {}\n  icon:  {}\n",
        entry.glyph(),
        entry.description,
        entry.color.as_str(),
        entry.color.hex(),
        entry.icon
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::presentation::DEFAULT_PRESENTATION;

    #[test]
    fn test_format_known_label() {
        let text = format_presentation(&present("sadness"));
        assert!(text.contains("color: sadness #4A90E2"));
        assert!(text.contains("icon:  sad"));
    }

    #[test]
    fn test_format_default_entry() {
        let text = format_presentation(&DEFAULT_PRESENTATION);
        assert!(text.starts_with("? "));
        assert!(text.contains("balanced"));
        assert!(text.contains("primary"));
        assert!(text.contains("help-circle"));
    }

    #[test]
    fn test_label_row_json() {
        let row = LabelRow {
            label: EmotionLabel::Anger,
            presentation: EmotionLabel::Anger.presentation().into(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["label"], "anger");
        assert_eq!(json["icon"], "flame");
        assert_eq!(json["color"], "anger");
    }
}
