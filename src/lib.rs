pub mod cli;
pub mod curation;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod policy;
pub mod report;
pub mod store;

pub use error::{CurationError, Result};
pub use models::{Dataset, Item};
pub use pipeline::{RunOptions, clean_dataset, mark_dataset};
pub use report::{CleanReport, MarkReport};
