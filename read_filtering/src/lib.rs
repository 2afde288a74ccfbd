//! Drop the records of a FASTA file whose identifiers start with one of
//! the given prefixes, and keep a log of what was dropped.
//! # Example
//! ```ignore
//! let config = read_filtering::Config::new("16S_rRNA.fasta", "dropped_header.txt");
//! let now = chrono::Local::now().naive_local();
//! let report = read_filtering::run(&config, now).unwrap();
//! println!("{}", report.result());
//! ```
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;
extern crate bio;
extern crate chrono;
extern crate serde_json;
pub mod config;
mod error;
pub mod exclusion;
pub mod filter;
pub mod records;
pub mod report;
pub use config::Config;
pub use error::FilterError;
pub use exclusion::{CaseMode, ExclusionList};
pub use filter::{filter_records, FilterResult};
pub use report::{FilterSummary, OutputPaths, Report};
use chrono::NaiveDateTime;

/// Load the exclusion list, filter the input, then write the kept records,
/// the log and (if asked) the JSON summary.
/// Nothing is written unless both inputs could be read in full.
pub fn run(config: &Config, timestamp: NaiveDateTime) -> Result<Report, FilterError> {
    debug!("Config:\n{}", config);
    let exclusions = ExclusionList::from_file(&config.exclusion_list, config.case_mode)?;
    info!(
        "{} prefixes from {} ({})",
        exclusions.len(),
        config.exclusion_list.display(),
        exclusions.mode()
    );
    let reads = records::parse_into_vec(&config.input)?;
    info!("{} records from {}", reads.len(), config.input.display());
    let result = filter_records(reads, &exclusions);
    debug!("{}", result);
    let paths = OutputPaths::new(config, &timestamp);
    records::write_to_file(&paths.output, result.kept())?;
    let report = Report::new(config.input.clone(), paths, timestamp, result);
    report.write_log()?;
    if let Some(json) = &config.summary_json {
        report.write_summary_json(json)?;
    }
    Ok(report)
}
