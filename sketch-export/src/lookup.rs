//! Extension channel lookup
//!
//! Channel names are resolved to slot indices once per stroke. Reading a
//! point afterwards is a pair of indexed loads.

use sketch_format::constants::REQUIRED_CHANNELS;
use sketch_format::{ControlPoint, Result, SketchError, Stroke};

/// Timestamp and pressure read from one control point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSample {
    /// Value of the `timestamp` channel
    pub timestamp: f64,
    /// Value of the `pressure` channel
    pub pressure: f64,
}

/// Resolved slot indices for the channels the export needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelLookup {
    stroke: usize,
    timestamp: usize,
    pressure: usize,
}

impl ChannelLookup {
    /// Resolve the required channels of the stroke at `stroke_index`.
    ///
    /// Fails with [`SketchError::MissingExtensionChannel`] naming the first
    /// absent channel. There is no fallback value.
    pub fn for_stroke(stroke_index: usize, stroke: &Stroke) -> Result<Self> {
        let [timestamp, pressure] = stroke
            .extension_channels
            .resolve(REQUIRED_CHANNELS)
            .map_err(|channel| SketchError::MissingExtensionChannel {
                channel: channel.to_string(),
                stroke: stroke_index,
            })?;

        Ok(Self {
            stroke: stroke_index,
            timestamp,
            pressure,
        })
    }

    /// Stroke this lookup was resolved for
    pub fn stroke_index(&self) -> usize {
        self.stroke
    }

    /// Slot of the `timestamp` channel
    pub fn timestamp_index(&self) -> usize {
        self.timestamp
    }

    /// Slot of the `pressure` channel
    pub fn pressure_index(&self) -> usize {
        self.pressure
    }

    /// Read timestamp and pressure from a control point of the same stroke.
    ///
    /// A point whose extension array does not reach a resolved slot is
    /// reported as [`SketchError::MalformedSketch`].
    pub fn read(&self, point_index: usize, point: &ControlPoint) -> Result<PointSample> {
        Ok(PointSample {
            timestamp: self.slot(point_index, point, self.timestamp, REQUIRED_CHANNELS[0])?,
            pressure: self.slot(point_index, point, self.pressure, REQUIRED_CHANNELS[1])?,
        })
    }

    fn slot(
        &self,
        point_index: usize,
        point: &ControlPoint,
        index: usize,
        channel: &str,
    ) -> Result<f64> {
        point.extension(index).ok_or_else(|| {
            SketchError::MalformedSketch(format!(
                "stroke {} point {} has {} extension values, channel \"{}\" needs slot {}",
                self.stroke,
                point_index,
                point.extension_values.len(),
                channel,
                index
            ))
        })
    }
}
