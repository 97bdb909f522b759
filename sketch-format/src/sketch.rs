//! Decoded sketch structures
//!
//! These types are what a sketch decoder produces and what the exporter
//! consumes. They are plain data: positions, orientations and colors are
//! carried exactly as decoded.

use crate::channels::ExtensionChannels;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// 3D position in sketch units
pub type Position = [f32; 3];
/// Rotation quaternion, `[x, y, z, w]`
pub type Orientation = [f32; 4];
/// RGBA brush color
pub type Color = [f32; 4];
/// Per-point extension values, aligned with the stroke's channel map
pub type ExtensionValues = SmallVec<[f64; 4]>;

/// One sampled point along a stroke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Position
    pub position: Position,
    /// Orientation
    pub orientation: Orientation,
    /// Extension values, indexed through [`Stroke::extension_channels`]
    #[serde(default)]
    pub extension_values: ExtensionValues,
}

impl ControlPoint {
    /// Create a control point
    pub fn new(
        position: Position,
        orientation: Orientation,
        extension_values: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            position,
            orientation,
            extension_values: extension_values.into_iter().collect(),
        }
    }

    /// Read one extension slot
    pub fn extension(&self, index: usize) -> Option<f64> {
        self.extension_values.get(index).copied()
    }
}

/// One continuous pen-down gesture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Index into [`Sketch::brush_table`]
    pub brush_index: u32,
    /// Brush color
    pub brush_color: Color,
    /// Control points in drawing order
    #[serde(default)]
    pub control_points: Vec<ControlPoint>,
    /// Names of the extension slots carried by every control point
    #[serde(default)]
    pub extension_channels: ExtensionChannels,
}

impl Stroke {
    /// Create an empty stroke
    pub fn new(brush_index: u32, brush_color: Color, extension_channels: ExtensionChannels) -> Self {
        Self {
            brush_index,
            brush_color,
            control_points: Vec::new(),
            extension_channels,
        }
    }

    /// Append a control point
    pub fn push(&mut self, point: ControlPoint) {
        self.control_points.push(point);
    }

    /// Number of control points
    pub fn len(&self) -> usize {
        self.control_points.len()
    }

    /// Whether the stroke has no control points
    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }
}

/// A fully decoded sketch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sketch {
    /// Strokes in drawing order
    #[serde(default)]
    pub strokes: Vec<Stroke>,
    /// Global brush table referenced by [`Stroke::brush_index`]
    #[serde(default)]
    pub brush_table: Vec<String>,
}

impl Sketch {
    /// Create a sketch
    pub fn new(strokes: Vec<Stroke>, brush_table: Vec<String>) -> Self {
        Self {
            strokes,
            brush_table,
        }
    }

    /// Total number of control points across all strokes
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }
}
