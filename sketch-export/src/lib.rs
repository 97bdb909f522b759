//! Sketch Export - Stroke to document transformation
//!
//! This crate turns a decoded [`Sketch`] into a versioned [`OutputDocument`]:
//!
//! - Extension channel lookup, resolved once per stroke
//! - Per-stroke brush and point records
//! - Document assembly with a uniform author / brush overlay
//!
//! Everything here is synchronous and free of I/O. Serializing the document to
//! bytes is the job of `sketch-io`.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod assemble;
pub mod document;
pub mod lookup;

// Re-export commonly used types
pub use sketch_format::{
    constants, ControlPoint, ExtensionChannels, Result, Sketch, SketchError, Stroke,
};

// Re-export our own types
pub use assemble::{assemble, assemble_stroke};
pub use document::{BrushRecord, OutputDocument, PointRecord, StrokeRecord};
pub use lookup::{ChannelLookup, PointSample};

use serde::{Deserialize, Serialize};
use sketch_format::constants::{DEFAULT_AUTHOR, DEFAULT_BRUSH_SIZE, DEFAULT_BRUSH_TYPE};

/// Overlay applied uniformly while assembling a document.
///
/// Values are not validated: any brush type or size is written as given and
/// left for the consuming renderer to interpret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Author recorded in the document
    pub author: String,
    /// Brush type written for every brush table entry
    pub brush_type: String,
    /// Brush size written for every stroke
    pub brush_size: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            brush_type: DEFAULT_BRUSH_TYPE.to_string(),
            brush_size: DEFAULT_BRUSH_SIZE,
        }
    }
}

impl ExportOptions {
    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the brush type
    pub fn with_brush_type(mut self, brush_type: impl Into<String>) -> Self {
        self.brush_type = brush_type.into();
        self
    }

    /// Set the brush size
    pub fn with_brush_size(mut self, brush_size: f32) -> Self {
        self.brush_size = brush_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_options_defaults() {
        let opts = ExportOptions::default();
        assert_eq!(opts.author, "");
        assert_eq!(opts.brush_type, "smooth");
        assert_eq!(opts.brush_size, 0.25);
    }

    #[test]
    fn test_export_options_partial_json_uses_defaults() {
        let opts: ExportOptions = serde_json::from_str(r#"{"author":"jane"}"#).unwrap();
        assert_eq!(opts.author, "jane");
        assert_eq!(opts.brush_type, DEFAULT_BRUSH_TYPE);
        assert_eq!(opts.brush_size, DEFAULT_BRUSH_SIZE);
    }

    #[test]
    fn test_export_options_accepts_any_values() {
        let opts = ExportOptions::default()
            .with_author("jane")
            .with_brush_type("")
            .with_brush_size(-3.0);
        assert_eq!(opts.brush_type, "");
        assert_eq!(opts.brush_size, -3.0);
    }
}
