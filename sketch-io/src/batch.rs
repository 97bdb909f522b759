//! Batch export
//!
//! Each job owns its sketch, document and sink, so jobs run on a rayon pool
//! without any shared state. A failing job is recorded and never stops its
//! siblings. Outcomes are reported in job order regardless of scheduling.

use crate::{
    execute_export, output_path_for, ExportRequest, ExportSummary, OutputSink, SketchInput,
    WriteOptions,
};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use sketch_export::ExportOptions;
use sketch_format::{Result, SketchError};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

const MAX_BATCH_THREADS: usize = 16;

/// Configuration controlling how batch jobs are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchConfig {
    /// Optional cap on worker threads; `Some(1)` runs jobs sequentially.
    pub max_threads: Option<usize>,
}

impl BatchConfig {
    /// Worker threads to use for `job_count` jobs.
    ///
    /// Never more than the jobs, the available cores, the user cap or
    /// `MAX_BATCH_THREADS`, and never less than one.
    pub fn thread_count(&self, job_count: usize) -> usize {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let cap = self
            .max_threads
            .map(|cap| cap.max(1))
            .unwrap_or(cores)
            .min(MAX_BATCH_THREADS);
        cap.min(job_count).max(1)
    }
}

/// A named export request
pub struct ExportJob {
    /// Label used in logs and outcomes, usually the input file name
    pub name: String,
    /// The export to perform
    pub request: ExportRequest,
}

impl ExportJob {
    /// Job exporting `request` under `name`
    pub fn new(name: impl Into<String>, request: ExportRequest) -> Self {
        Self {
            name: name.into(),
            request,
        }
    }

    /// Job converting a JSON-serialized sketch file into a document next to it
    /// (or inside `out_dir`).
    ///
    /// Refuses inputs whose output path would be the input itself.
    pub fn from_path(
        input: &Path,
        out_dir: Option<&Path>,
        options: ExportOptions,
        write_options: WriteOptions,
    ) -> Result<Self> {
        let output = output_path_for(input, out_dir);
        if resolves_to_same_file(input, &output) {
            return Err(SketchError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("output path {} would overwrite the input", output.display()),
            )));
        }

        Ok(Self::new(
            input.display().to_string(),
            ExportRequest {
                input: SketchInput::JsonPath(input.to_path_buf()),
                output: OutputSink::Path(output),
                options,
                write_options,
            },
        ))
    }
}

/// Whether writing `output` would replace `input`.
///
/// Both sides are canonicalized so `..` segments and symlinked directories
/// compare by the file they reach. The output file itself may not exist yet,
/// so only its parent directory is resolved.
fn resolves_to_same_file(input: &Path, output: &Path) -> bool {
    let Ok(input_real) = fs::canonicalize(input) else {
        return input == output;
    };
    let parent = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    match (fs::canonicalize(parent), output.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name) == input_real,
        _ => input == output,
    }
}

/// Result of one batch job
#[derive(Debug)]
pub struct JobOutcome {
    /// Job name
    pub name: String,
    /// Summary on success, the job's error otherwise
    pub result: Result<ExportSummary>,
}

impl JobOutcome {
    /// Whether the job produced a document
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a batch, in job order
#[derive(Debug)]
pub struct BatchReport {
    /// One outcome per job
    pub outcomes: Vec<JobOutcome>,
    /// Worker threads used
    pub thread_count: usize,
}

impl BatchReport {
    /// Number of jobs that produced a document
    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    /// Number of jobs that failed
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.converted()
    }

    /// Failed jobs with their errors
    pub fn failures(&self) -> impl Iterator<Item = (&str, &SketchError)> {
        self.outcomes.iter().filter_map(|o| match &o.result {
            Ok(_) => None,
            Err(err) => Some((o.name.as_str(), err)),
        })
    }

    /// Whether every job succeeded
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Run every job, isolating failures per job.
pub fn execute_batch(jobs: Vec<ExportJob>, config: &BatchConfig) -> BatchReport {
    let thread_count = config.thread_count(jobs.len());

    let outcomes: Vec<JobOutcome> = if thread_count < 2 {
        jobs.into_iter().map(run_job).collect()
    } else {
        match ThreadPoolBuilder::new()
            .num_threads(thread_count)
            .thread_name(|idx| format!("sketch-export-{}", idx))
            .build()
        {
            Ok(pool) => pool.install(|| jobs.into_par_iter().map(run_job).collect()),
            Err(err) => {
                warn!(error = %err, "failed to build worker pool, exporting sequentially");
                return BatchReport {
                    outcomes: jobs.into_iter().map(run_job).collect(),
                    thread_count: 1,
                };
            }
        }
    };

    let report = BatchReport {
        outcomes,
        thread_count,
    };
    info!(
        converted = report.converted(),
        failed = report.failed(),
        threads = report.thread_count,
        "batch finished"
    );
    report
}

fn run_job(job: ExportJob) -> JobOutcome {
    let ExportJob { name, request } = job;
    let result = execute_export(request);
    match &result {
        Ok(summary) => info!(
            job = %name,
            strokes = summary.strokes,
            bytes = summary.bytes_written,
            "converted"
        ),
        Err(err) => warn!(job = %name, error = %err, "conversion failed"),
    }
    JobOutcome { name, result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_thread_count_never_exceeds_jobs() {
        let config = BatchConfig {
            max_threads: Some(8),
        };
        assert!(config.thread_count(3) <= 3);
        assert_eq!(config.thread_count(0), 1);
    }

    #[test]
    fn test_thread_cap_of_zero_means_one() {
        let config = BatchConfig {
            max_threads: Some(0),
        };
        assert_eq!(config.thread_count(10), 1);
    }

    #[test]
    fn test_thread_count_is_bounded() {
        let config = BatchConfig {
            max_threads: Some(1_000),
        };
        assert!(config.thread_count(1_000) <= MAX_BATCH_THREADS);
    }

    #[test]
    fn test_from_path_refuses_to_overwrite_input() {
        let result = ExportJob::from_path(
            Path::new("sketch.json"),
            None,
            ExportOptions::default(),
            WriteOptions::default(),
        );
        assert!(matches!(result, Err(SketchError::Io(_))));
    }

    #[test]
    fn test_from_path_names_job_after_input() {
        let job = ExportJob::from_path(
            Path::new("in/tree.sketch"),
            Some(Path::new("out")),
            ExportOptions::default(),
            WriteOptions::default(),
        )
        .unwrap();
        assert_eq!(job.name, Path::new("in/tree.sketch").display().to_string());
        match job.request.output {
            OutputSink::Path(path) => assert_eq!(path, PathBuf::from("out/tree.json")),
            OutputSink::Writer(_) => panic!("expected a path sink"),
        }
    }
}
