//! End-to-end export through files

use serde_json::Value;
use sketch_io::{
    execute_export, load_options, ExportOptions, ExportRequest, OutputDocument, OutputSink,
    SketchError, SketchInput, WriteOptions,
};
use sketch_test_utils::samples::{
    missing_pressure_on_second_stroke, reference_document_json, reference_sketch,
};
use sketch_test_utils::init_tracing;
use std::fs;
use tempfile::TempDir;

fn reference_options() -> ExportOptions {
    ExportOptions::default()
        .with_author("jane")
        .with_brush_type("ink")
        .with_brush_size(0.5)
}

#[test]
fn json_sketch_file_exports_reference_document() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("reference.sketch");
    let output = dir.path().join("reference.json");
    fs::write(&input, serde_json::to_vec(&reference_sketch()).unwrap()).unwrap();

    let summary = execute_export(ExportRequest {
        input: SketchInput::JsonPath(input),
        output: OutputSink::Path(output.clone()),
        options: reference_options(),
        write_options: WriteOptions::default(),
    })
    .expect("export");

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, reference_document_json());
    assert_eq!(summary.bytes_written, written.len() as u64);
    assert_eq!(summary.strokes, 1);
    assert_eq!(summary.points, 2);
    assert_eq!(summary.brushes, 2);
}

#[test]
fn failed_assembly_leaves_no_output_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("broken.json");

    let err = execute_export(ExportRequest {
        input: SketchInput::Sketch(missing_pressure_on_second_stroke()),
        output: OutputSink::Path(output.clone()),
        options: ExportOptions::default(),
        write_options: WriteOptions::default(),
    })
    .unwrap_err();

    assert_eq!(err.missing_channel(), Some("pressure"));
    assert!(!output.exists());
}

#[test]
fn missing_input_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = execute_export(ExportRequest {
        input: SketchInput::JsonPath(dir.path().join("absent.sketch")),
        output: OutputSink::Path(dir.path().join("absent.json")),
        options: ExportOptions::default(),
        write_options: WriteOptions::default(),
    })
    .unwrap_err();
    assert!(matches!(err, SketchError::Io(_)));
}

#[test]
fn pretty_output_is_equivalent() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("pretty.json");

    execute_export(ExportRequest {
        input: SketchInput::Sketch(reference_sketch()),
        output: OutputSink::Path(output.clone()),
        options: reference_options(),
        write_options: WriteOptions { pretty: true },
    })
    .expect("export");

    let pretty: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let compact: Value = serde_json::from_str(reference_document_json()).unwrap();
    assert_eq!(pretty, compact);

    let doc: OutputDocument = serde_json::from_value(pretty).unwrap();
    assert_eq!(doc.version, 1);
}

#[test]
fn options_file_fills_missing_fields_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.json");
    fs::write(&path, r#"{ "author": "jane", "brush_size": 0.5 }"#).unwrap();

    let opts = load_options(&path).unwrap();
    assert_eq!(opts.author, "jane");
    assert_eq!(opts.brush_type, "smooth");
    assert_eq!(opts.brush_size, 0.5);
}

#[test]
fn options_file_with_wrong_types_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.json");
    fs::write(&path, r#"{ "brush_size": "big" }"#).unwrap();

    assert!(matches!(load_options(&path), Err(SketchError::Json(_))));
}
