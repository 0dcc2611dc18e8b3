//! Custom error types for emotiglass
//!
//! The emotion core never fails. These errors only come from the edges:
//! user input, the configuration file, and the terminal.

use thiserror::Error;

/// Main error type for the emotiglass application
#[derive(Error, Debug)]
pub enum EmotiglassError {
    /// Input could not be understood
    #[error("{0}")]
    InvalidInput(String),

    /// Emotion intensity outside the normalized range (strict mode only)
    #[error("Intensity for '{label}' must be between 0 and 1, got {value}.\n\n  → Scale raw scores to the 0..1 range, or drop --strict to ignore bad values.")]
    InvalidIntensity { label: String, value: f64 },

    /// Auxiliary factor outside its range (strict mode only)
    #[error("'{name}' must be between 0 and 100, got {value}.\n\n  → energy, calmness and tension are percentages.")]
    InvalidAuxiliary { name: String, value: f64 },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Emotion data is not valid JSON: {0}\n\n  → Example: {{\"joy\": 0.8, \"sadness\": 0.1}}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}\n\n  → Run 'emotiglass config path' to locate it, or 'emotiglass config reset'.")]
    Toml(String),

    /// Terminal/TUI error
    #[error("Terminal error: {0}\n\n  → Try resizing your terminal or restarting it.")]
    Terminal(String),
}

impl From<toml::de::Error> for EmotiglassError {
    fn from(err: toml::de::Error) -> Self {
        EmotiglassError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for EmotiglassError {
    fn from(err: toml::ser::Error) -> Self {
        EmotiglassError::Toml(err.to_string())
    }
}

/// Result type alias using EmotiglassError
pub type Result<T> = std::result::Result<T, EmotiglassError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_message_names_label() {
        let err = EmotiglassError::InvalidIntensity {
            label: "joy".into(),
            value: 1.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("'joy'"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let err: EmotiglassError = toml::from_str::<toml::Value>("= broken")
            .unwrap_err()
            .into();
        assert!(matches!(err, EmotiglassError::Toml(_)));
    }
}
