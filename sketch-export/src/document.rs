//! Output document types
//!
//! Field names and nesting are the wire contract with downstream renderers.
//! Struct field order is the serialized key order.

use serde::{Deserialize, Serialize};
use sketch_format::{Color, Orientation, Position};

/// Versioned scene document produced from one sketch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDocument {
    /// Schema version, always [`SCHEMA_VERSION`](sketch_format::constants::SCHEMA_VERSION)
    pub version: u32,
    /// Free-form author
    pub author: String,
    /// One record per input stroke, in input order
    pub strokes: Vec<StrokeRecord>,
    /// One brush type per brush table entry
    pub brushes: Vec<String>,
}

impl OutputDocument {
    /// Total number of point records across all strokes
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(|stroke| stroke.points.len()).sum()
    }
}

/// Exported stroke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeRecord {
    /// Brush used by the stroke
    pub brush: BrushRecord,
    /// Points in drawing order
    pub points: Vec<PointRecord>,
}

/// Brush reference of an exported stroke
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushRecord {
    /// Index into the document's `brushes`
    pub index: u32,
    /// RGBA color
    pub color: Color,
    /// Brush size
    pub size: f32,
}

/// Exported control point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    /// Position
    pub position: Position,
    /// Orientation quaternion
    pub orientation: Orientation,
    /// Timestamp channel value
    pub timestamp: f64,
    /// Pressure channel value
    pub pressure: f64,
}
