//! Error types for sketch export

use thiserror::Error;

/// Sketch export error types
#[derive(Debug, Error)]
pub enum SketchError {
    /// A stroke does not expose a per-point channel the export requires.
    #[error("Stroke {stroke} is missing extension channel \"{channel}\"")]
    MissingExtensionChannel {
        /// Name of the absent channel.
        channel: String,
        /// Position of the offending stroke within the sketch.
        stroke: usize,
    },
    /// Sketch contents are structurally inconsistent.
    #[error("Malformed sketch: {0}")]
    MalformedSketch(String),
    /// I/O operation failed while reading or writing data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SketchError {
    /// Name of the missing channel, when this is a missing-channel error.
    pub fn missing_channel(&self) -> Option<&str> {
        match self {
            SketchError::MissingExtensionChannel { channel, .. } => Some(channel),
            _ => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SketchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_channel_message_names_stroke_and_channel() {
        let err = SketchError::MissingExtensionChannel {
            channel: "pressure".to_string(),
            stroke: 1,
        };
        assert_eq!(
            err.to_string(),
            "Stroke 1 is missing extension channel \"pressure\""
        );
        assert_eq!(err.missing_channel(), Some("pressure"));
    }

    #[test]
    fn test_missing_channel_accessor_on_other_variants() {
        let err = SketchError::MalformedSketch("short extension array".into());
        assert_eq!(err.missing_channel(), None);
        assert!(err.to_string().contains("short extension array"));
    }
}
