//! Failure behavior of document assembly

use sketch_export::{assemble, ExportOptions, SketchError};
use sketch_format::ExtensionChannels;
use sketch_test_utils::samples::missing_pressure_on_second_stroke;
use sketch_test_utils::{SketchBuilder, StrokeBuilder, IDENTITY};

#[test]
fn missing_pressure_on_second_stroke_fails_whole_document() {
    let result = assemble(&missing_pressure_on_second_stroke(), &ExportOptions::default());

    match result {
        Err(SketchError::MissingExtensionChannel { channel, stroke }) => {
            assert_eq!(channel, "pressure");
            assert_eq!(stroke, 1);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(doc) => panic!("expected failure, got {} strokes", doc.strokes.len()),
    }
}

#[test]
fn first_failing_stroke_is_reported() {
    let sketch = SketchBuilder::new()
        .stroke(StrokeBuilder::new(0).line(1).build())
        .stroke(StrokeBuilder::with_channels(0, ["pressure"]).build())
        .stroke(StrokeBuilder::with_channels(0, ["timestamp"]).build())
        .build();

    let err = assemble(&sketch, &ExportOptions::default()).unwrap_err();
    assert_eq!(err.missing_channel(), Some("timestamp"));
    assert!(err.to_string().starts_with("Stroke 1 "));
}

#[test]
fn stroke_with_empty_channel_map_is_rejected() {
    let sketch = SketchBuilder::new()
        .brushes(1)
        .stroke(
            StrokeBuilder::new(0)
                .channels(ExtensionChannels::new())
                .point([0.0; 3], IDENTITY, &[1.0, 1.0])
                .build(),
        )
        .build();

    let err = assemble(&sketch, &ExportOptions::default()).unwrap_err();
    assert!(matches!(err, SketchError::MissingExtensionChannel { .. }));
}

#[test]
fn short_extension_array_is_surfaced_not_padded() {
    let sketch = SketchBuilder::new()
        .stroke(
            StrokeBuilder::new(0)
                .sample([0.0; 3], 1.0, 0.5)
                .point([1.0, 0.0, 0.0], IDENTITY, &[2.0])
                .build(),
        )
        .build();

    match assemble(&sketch, &ExportOptions::default()) {
        Err(SketchError::MalformedSketch(msg)) => {
            assert!(msg.contains("stroke 0 point 1"), "{msg}");
        }
        other => panic!("expected malformed sketch, got {other:?}"),
    }
}
