//! Canned sketches shared by the test suites

use crate::{SketchBuilder, StrokeBuilder, IDENTITY};
use sketch_format::Sketch;

/// One red stroke with two points and a two-entry brush table.
///
/// Exported with author `jane`, brush type `ink` and size `0.5` it produces
/// the reference document in [`reference_document_json`].
pub fn reference_sketch() -> Sketch {
    SketchBuilder::new()
        .brushes(2)
        .stroke(
            StrokeBuilder::new(3)
                .color([1.0, 0.0, 0.0, 1.0])
                .point([0.0, 0.0, 0.0], IDENTITY, &[100.0, 0.5])
                .point([1.0, 0.0, 0.0], IDENTITY, &[200.0, 0.8])
                .build(),
        )
        .build()
}

/// Serialized form of the reference document
pub fn reference_document_json() -> &'static str {
    concat!(
        r#"{"version":1,"author":"jane","strokes":[{"brush":{"index":3,"color":[1.0,0.0,0.0,1.0],"size":0.5},"#,
        r#""points":[{"position":[0.0,0.0,0.0],"orientation":[0.0,0.0,0.0,1.0],"timestamp":100.0,"pressure":0.5},"#,
        r#"{"position":[1.0,0.0,0.0],"orientation":[0.0,0.0,0.0,1.0],"timestamp":200.0,"pressure":0.8}]}],"#,
        r#""brushes":["ink","ink"]}"#
    )
}

/// Two strokes where only the second lacks a `pressure` channel
pub fn missing_pressure_on_second_stroke() -> Sketch {
    SketchBuilder::new()
        .brushes(1)
        .stroke(StrokeBuilder::new(0).line(3).build())
        .stroke(
            StrokeBuilder::with_channels(0, ["timestamp"])
                .point([0.0, 0.0, 0.0], IDENTITY, &[5.0])
                .build(),
        )
        .build()
}

/// Larger sketch for batch and benchmark use
pub fn dense_sketch(strokes: usize, points_per_stroke: usize, brushes: usize) -> Sketch {
    let mut builder = SketchBuilder::new().brushes(brushes);
    for i in 0..strokes {
        let brush = if brushes == 0 { 0 } else { (i % brushes) as u32 };
        builder = builder.stroke(StrokeBuilder::new(brush).line(points_per_stroke).build());
    }
    builder.build()
}
