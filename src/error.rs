use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures while loading, validating or persisting a dataset or policy.
///
/// Configuration drift is deliberately absent: it is reported through
/// [`crate::curation::Drift`] and never aborts a run.
#[derive(Debug, Error)]
pub enum CurationError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed dataset {}: {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("dataset {} record #{index}: {reason}", path.display())]
    SchemaViolation {
        path: PathBuf,
        index: usize,
        reason: String,
    },
    #[error("malformed curation policy {}: {source}", path.display())]
    Policy {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CurationError>;
