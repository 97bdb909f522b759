//! Document assembly
//!
//! Walks the strokes of a sketch in order and builds one record per stroke.
//! The first stroke that cannot be exported aborts the whole document.

use crate::document::{BrushRecord, OutputDocument, PointRecord, StrokeRecord};
use crate::lookup::ChannelLookup;
use crate::ExportOptions;
use sketch_format::constants::SCHEMA_VERSION;
use sketch_format::{Result, Sketch, Stroke};
use tracing::{debug, trace};

/// Build the output document for `sketch`.
///
/// Strokes and points keep their input order. `brushes` gets one copy of
/// `opts.brush_type` per brush table entry, independent of how many strokes
/// reference it. Fails on the first stroke lacking a required channel or
/// carrying a short extension array; no partial document is returned.
#[tracing::instrument(
    skip_all,
    fields(strokes = sketch.strokes.len(), brushes = sketch.brush_table.len())
)]
pub fn assemble(sketch: &Sketch, opts: &ExportOptions) -> Result<OutputDocument> {
    let strokes = sketch
        .strokes
        .iter()
        .enumerate()
        .map(|(index, stroke)| assemble_stroke(index, stroke, opts.brush_size))
        .collect::<Result<Vec<_>>>()?;

    let brushes = vec![opts.brush_type.clone(); sketch.brush_table.len()];

    let document = OutputDocument {
        version: SCHEMA_VERSION,
        author: opts.author.clone(),
        strokes,
        brushes,
    };
    debug!(points = document.point_count(), "assembled document");
    Ok(document)
}

/// Build the record for a single stroke.
///
/// `index` is the stroke's position in its sketch and only feeds error
/// messages.
pub fn assemble_stroke(index: usize, stroke: &Stroke, brush_size: f32) -> Result<StrokeRecord> {
    let lookup = ChannelLookup::for_stroke(index, stroke)?;
    trace!(
        stroke = lookup.stroke_index(),
        timestamp = lookup.timestamp_index(),
        pressure = lookup.pressure_index(),
        "resolved extension channels"
    );

    let points = stroke
        .control_points
        .iter()
        .enumerate()
        .map(|(point_index, point)| {
            let sample = lookup.read(point_index, point)?;
            Ok(PointRecord {
                position: point.position,
                orientation: point.orientation,
                timestamp: sample.timestamp,
                pressure: sample.pressure,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(StrokeRecord {
        brush: BrushRecord {
            index: stroke.brush_index,
            color: stroke.brush_color,
            size: brush_size,
        },
        points,
    })
}
