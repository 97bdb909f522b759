//! Sketch Test Utilities
//!
//! Shared fixture builders and helpers for the sketch export crates.

use sketch_format::constants::{CHANNEL_PRESSURE, CHANNEL_TIMESTAMP};
use sketch_format::{Color, ControlPoint, ExtensionChannels, Orientation, Position, Sketch, Stroke};
use std::sync::Once;

pub mod samples;

/// Identity rotation
pub const IDENTITY: Orientation = [0.0, 0.0, 0.0, 1.0];

/// Install a test-friendly tracing subscriber once per process.
///
/// Output goes through the libtest capture, so it only shows for failing tests.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .try_init();
    });
}

/// Builder for a single stroke
pub struct StrokeBuilder {
    stroke: Stroke,
}

impl StrokeBuilder {
    /// Stroke exposing `timestamp` then `pressure`
    pub fn new(brush_index: u32) -> Self {
        Self::with_channels(brush_index, [CHANNEL_TIMESTAMP, CHANNEL_PRESSURE])
    }

    /// Stroke exposing the given channels, in slot order
    pub fn with_channels<'a>(brush_index: u32, channels: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            stroke: Stroke::new(
                brush_index,
                [1.0, 1.0, 1.0, 1.0],
                ExtensionChannels::from_names(channels),
            ),
        }
    }

    /// Set the brush color
    pub fn color(mut self, color: Color) -> Self {
        self.stroke.brush_color = color;
        self
    }

    /// Replace the channel map
    pub fn channels(mut self, channels: ExtensionChannels) -> Self {
        self.stroke.extension_channels = channels;
        self
    }

    /// Append a point with raw extension values
    pub fn point(mut self, position: Position, orientation: Orientation, ext: &[f64]) -> Self {
        self.stroke
            .push(ControlPoint::new(position, orientation, ext.iter().copied()));
        self
    }

    /// Append a point for a `timestamp`, `pressure` layout
    pub fn sample(self, position: Position, timestamp: f64, pressure: f64) -> Self {
        self.point(position, IDENTITY, &[timestamp, pressure])
    }

    /// Append `count` points along the x axis, 10 ms apart
    pub fn line(mut self, count: usize) -> Self {
        for i in 0..count {
            self = self.sample([i as f32 * 0.01, 0.0, 0.0], i as f64 * 10.0, 0.5);
        }
        self
    }

    /// Build the stroke
    pub fn build(self) -> Stroke {
        self.stroke
    }
}

/// Builder for a sketch
#[derive(Default)]
pub struct SketchBuilder {
    sketch: Sketch,
}

impl SketchBuilder {
    /// Create an empty sketch builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a brush table entry
    pub fn brush(mut self, id: &str) -> Self {
        self.sketch.brush_table.push(id.to_string());
        self
    }

    /// Append `count` generated brush table entries
    pub fn brushes(mut self, count: usize) -> Self {
        for i in 0..count {
            self.sketch.brush_table.push(format!("brush-{i:04}"));
        }
        self
    }

    /// Append a stroke
    pub fn stroke(mut self, stroke: Stroke) -> Self {
        self.sketch.strokes.push(stroke);
        self
    }

    /// Build the sketch
    pub fn build(self) -> Sketch {
        self.sketch
    }
}
