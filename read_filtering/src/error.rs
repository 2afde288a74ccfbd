use std::path::PathBuf;
use thiserror::Error;

/// Every failure is terminal for a run.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("could not read {}: {}", path.display(), source)]
    ResourceNotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed record in {}: {}", path.display(), reason)]
    MalformedRecord { path: PathBuf, reason: String },
    #[error("could not write {}: {}", path.display(), source)]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not encode summary to {}: {}", path.display(), source)]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl FilterError {
    pub(crate) fn not_found<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        FilterError::ResourceNotFound {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn malformed<P: Into<PathBuf>, S: Into<String>>(path: P, reason: S) -> Self {
        FilterError::MalformedRecord {
            path: path.into(),
            reason: reason.into(),
        }
    }
    pub(crate) fn write_failure<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        FilterError::WriteFailure {
            path: path.into(),
            source,
        }
    }
}
