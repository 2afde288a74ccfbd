use super::CaseMode;
use std::path::PathBuf;

/// Appended to the input's stem to name the filtered output.
pub const DEFAULT_SUFFIX: &str = "_filtered";
/// Put between the input's stem and the timestamp to name the log.
pub const DEFAULT_LOG_INFIX: &str = "_filter_log_";
/// Timestamp in log file names.
pub const FILE_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";
/// Timestamp inside the log.
pub const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Everything a run needs to know. Output names are derived from these
/// fields only.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input FASTA.
    pub input: PathBuf,
    /// Prefixes to exclude, one per line.
    pub exclusion_list: PathBuf,
    /// Where the output and the log go. `None` means the current directory.
    pub output_dir: Option<PathBuf>,
    pub suffix: String,
    pub log_infix: String,
    pub case_mode: CaseMode,
    /// If set, a JSON summary is written here too.
    pub summary_json: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            exclusion_list: PathBuf::new(),
            output_dir: None,
            suffix: DEFAULT_SUFFIX.to_string(),
            log_infix: DEFAULT_LOG_INFIX.to_string(),
            case_mode: CaseMode::default(),
            summary_json: None,
        }
    }
}

impl Config {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(input: P, exclusion_list: Q) -> Self {
        Self {
            input: input.into(),
            exclusion_list: exclusion_list.into(),
            ..Default::default()
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Input:{}", self.input.display())?;
        writeln!(f, "ExclusionList:{}", self.exclusion_list.display())?;
        match &self.output_dir {
            Some(dir) => writeln!(f, "OutputDir:{}", dir.display())?,
            None => writeln!(f, "OutputDir:.")?,
        }
        writeln!(f, "Suffix:{}", self.suffix)?;
        writeln!(f, "LogInfix:{}", self.log_infix)?;
        write!(f, "Matching:{}", self.case_mode)
    }
}
