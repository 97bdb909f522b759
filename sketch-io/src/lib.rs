//! Sketch I/O - Document sinks and high-level export APIs
//!
//! This crate wraps the pure assembler in `sketch-export` with the plumbing a
//! converter needs:
//!
//! - Decoded sketch inputs (in memory or serialized as JSON)
//! - JSON output sinks with byte accounting
//! - Output path mapping
//! - Parallel batch export with per-job isolation

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod batch;
pub mod writer;

// Re-export commonly used types
pub use batch::{execute_batch, BatchConfig, BatchReport, ExportJob, JobOutcome};
pub use sketch_export::{assemble, ExportOptions, OutputDocument};
pub use sketch_format::{Result, Sketch, SketchError};
pub use writer::{write_document, WriteOptions};

use sketch_format::constants::OUTPUT_EXTENSION;
use std::fs::{self, File};
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where a decoded sketch comes from
pub enum SketchInput {
    /// Sketch already decoded in memory
    Sketch(Sketch),
    /// JSON file holding a serialized [`Sketch`]
    JsonPath(PathBuf),
    /// Reader yielding a serialized [`Sketch`]
    JsonReader(Box<dyn Read + Send>),
}

impl SketchInput {
    /// Resolve the input into an owned sketch
    pub fn into_sketch(self) -> Result<Sketch> {
        match self {
            SketchInput::Sketch(sketch) => Ok(sketch),
            SketchInput::JsonPath(path) => read_sketch(File::open(path)?),
            SketchInput::JsonReader(reader) => read_sketch(reader),
        }
    }
}

/// Where an output document is written
pub enum OutputSink {
    /// Create (or truncate) a file
    Path(PathBuf),
    /// Arbitrary writer
    Writer(Box<dyn Write + Send>),
}

impl OutputSink {
    fn write(self, document: &OutputDocument, opts: &WriteOptions) -> Result<u64> {
        match self {
            OutputSink::Path(path) => {
                write_to_file(&path, |file| write_document(document, file, opts))
            }
            OutputSink::Writer(writer) => write_document(document, writer, opts),
        }
    }
}

/// Create `path` and hand it to `write`; the file is removed again if
/// `write` fails so no truncated document is left behind.
fn write_to_file<F>(path: &Path, write: F) -> Result<u64>
where
    F: FnOnce(File) -> Result<u64>,
{
    let file = File::create(path)?;
    write(file).inspect_err(|err| {
        warn!(path = %path.display(), error = %err, "removing partially written output");
        let _ = fs::remove_file(path);
    })
}

/// One sketch-to-document export
pub struct ExportRequest {
    /// Sketch to export
    pub input: SketchInput,
    /// Destination of the JSON document
    pub output: OutputSink,
    /// Author / brush overlay
    pub options: ExportOptions,
    /// Serialization options
    pub write_options: WriteOptions,
}

/// Counters describing a finished export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Stroke records written
    pub strokes: usize,
    /// Point records written
    pub points: usize,
    /// Brush entries written
    pub brushes: usize,
    /// Bytes of JSON written
    pub bytes_written: u64,
}

/// Load, assemble and write one document.
///
/// The sink is only opened once assembly succeeded, and a file sink is
/// removed again if writing fails, so a failed export leaves no output file
/// behind.
pub fn execute_export(request: ExportRequest) -> Result<ExportSummary> {
    let ExportRequest {
        input,
        output,
        options,
        write_options,
    } = request;

    let sketch = input.into_sketch()?;
    let document = assemble(&sketch, &options)?;
    drop(sketch);

    let bytes_written = output.write(&document, &write_options)?;

    let summary = ExportSummary {
        strokes: document.strokes.len(),
        points: document.point_count(),
        brushes: document.brushes.len(),
        bytes_written,
    };
    debug!(?summary, "export finished");
    Ok(summary)
}

/// Deserialize a decoded sketch from JSON
pub fn read_sketch<R: Read>(input: R) -> Result<Sketch> {
    Ok(serde_json::from_reader(BufReader::new(input))?)
}

/// Read [`ExportOptions`] from a JSON file; absent fields keep their defaults.
pub fn load_options(path: impl AsRef<Path>) -> Result<ExportOptions> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Output path for an input file: same stem, `.json` extension.
///
/// With `out_dir` the file name is moved into that directory, otherwise it
/// stays next to the input.
pub fn output_path_for(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let renamed = input.with_extension(OUTPUT_EXTENSION);
    match (out_dir, renamed.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => renamed,
    }
}
