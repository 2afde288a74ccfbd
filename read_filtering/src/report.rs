//! Output names, the log, the console summary and the JSON summary.
use super::config::{FILE_TIME_FORMAT, LOG_TIME_FORMAT};
use super::{Config, FilterError, FilterResult};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Number of log lines echoed to the console.
const SUMMARY_LINES: usize = 6;
const EXCLUDED_HEADER: &str = "=== Excluded Sequence IDs ===";

/// Where the filtered records and the log of a run go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub output: PathBuf,
    pub log: PathBuf,
}

impl OutputPaths {
    /// `<stem><suffix>.<ext>` and `<stem><infix><YYYYMMDD_HHMMSS>.txt`,
    /// placed in the configured output directory.
    pub fn new(config: &Config, timestamp: &NaiveDateTime) -> Self {
        let stem = config
            .input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let output = match config.input.extension() {
            Some(ext) => format!("{}{}.{}", stem, config.suffix, ext.to_string_lossy()),
            None => format!("{}{}", stem, config.suffix),
        };
        let log = format!(
            "{}{}{}.txt",
            stem,
            config.log_infix,
            timestamp.format(FILE_TIME_FORMAT)
        );
        let locate = |name: String| match &config.output_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        };
        Self {
            output: locate(output),
            log: locate(log),
        }
    }
}

/// Serialisable digest of a run.
#[derive(Debug, Clone, Serialize)]
pub struct FilterSummary {
    pub input: String,
    pub output: String,
    pub log: String,
    pub timestamp: String,
    pub total: usize,
    pub excluded: usize,
    pub kept: usize,
    pub excluded_ids: Vec<String>,
}

/// A finished filter pass together with where it came from and where it goes.
#[derive(Debug, Clone)]
pub struct Report {
    input: PathBuf,
    paths: OutputPaths,
    timestamp: NaiveDateTime,
    result: FilterResult,
}

impl Report {
    pub fn new(
        input: PathBuf,
        paths: OutputPaths,
        timestamp: NaiveDateTime,
        result: FilterResult,
    ) -> Self {
        Self {
            input,
            paths,
            timestamp,
            result,
        }
    }
    pub fn result(&self) -> &FilterResult {
        &self.result
    }
    pub fn paths(&self) -> &OutputPaths {
        &self.paths
    }
    pub fn log_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Input file: {}", self.input.display()),
            format!("Output file: {}", self.paths.output.display()),
            format!("Date/time: {}", self.timestamp.format(LOG_TIME_FORMAT)),
            format!("Total sequences in input: {}", self.result.total()),
            format!("Sequences excluded: {}", self.result.excluded_count()),
            format!("Sequences kept: {}", self.result.kept_count()),
            String::new(),
            EXCLUDED_HEADER.to_string(),
        ];
        lines.extend(self.result.excluded_ids().iter().cloned());
        lines
    }
    /// The counts part of the log, then where the log went.
    pub fn console_lines(&self) -> Vec<String> {
        let mut lines: Vec<_> = self.log_lines().into_iter().take(SUMMARY_LINES).collect();
        lines.push(format!("Log saved to {}", self.paths.log.display()));
        lines
    }
    /// Write the log. It is written as a whole and never appended to.
    pub fn write_log(&self) -> Result<(), FilterError> {
        let log = &self.paths.log;
        std::fs::write(log, self.log_lines().join("\n"))
            .map_err(|why| FilterError::write_failure(log, why))?;
        debug!("Log written to {}", log.display());
        Ok(())
    }
    pub fn summary(&self) -> FilterSummary {
        FilterSummary {
            input: self.input.display().to_string(),
            output: self.paths.output.display().to_string(),
            log: self.paths.log.display().to_string(),
            timestamp: self.timestamp.format(LOG_TIME_FORMAT).to_string(),
            total: self.result.total(),
            excluded: self.result.excluded_count(),
            kept: self.result.kept_count(),
            excluded_ids: self.result.excluded_ids().to_vec(),
        }
    }
    pub fn write_summary_json<P: AsRef<Path>>(&self, file: P) -> Result<(), FilterError> {
        let file = file.as_ref();
        let json =
            serde_json::ser::to_string_pretty(&self.summary()).map_err(|source| {
                FilterError::Serialize {
                    path: file.to_path_buf(),
                    source,
                }
            })?;
        std::fs::write(file, json).map_err(|why| FilterError::write_failure(file, why))
    }
}
