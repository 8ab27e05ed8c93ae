//! Reading and rewriting catalog files.
//!
//! A catalog is a JSON array of item objects. Rewrites use two-space
//! indentation, keep non-ASCII text literal and end with a newline so diffs
//! against the previous revision stay line-oriented. Fields the passes do not
//! touch are written back with their original text.

use crate::error::{CurationError, Result};
use crate::models::Item;
use log::debug;
use serde_json::value::RawValue;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Load every record of a catalog, validating that each one is keyed by a
/// string `name`. Nothing is returned unless the whole file is valid.
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let content = fs::read(path).map_err(|source| CurationError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // Encoding errors surface here too, as malformed input.
    let records: Vec<Box<RawValue>> =
        serde_json::from_slice(&content).map_err(|source| CurationError::MalformedInput {
            path: path.to_path_buf(),
            source,
        })?;

    let items = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            Item::from_raw(record).map_err(|reason| CurationError::SchemaViolation {
                path: path.to_path_buf(),
                index,
                reason,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Loaded {} items from {:?}", items.len(), path);
    Ok(items)
}

/// Render records exactly as they are persisted.
pub fn to_json_string(items: &[Item]) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(items)?;
    json.push('\n');
    Ok(json)
}

/// Replace the catalog at `path` with `items`.
///
/// The content is written to a temporary file beside the target and renamed
/// over it, so a failure part-way leaves the previous file intact.
pub fn save_items(path: &Path, items: &[Item]) -> Result<()> {
    let persist_err = |source: io::Error| CurationError::Persist {
        path: path.to_path_buf(),
        source,
    };

    let json = to_json_string(items).map_err(|err| persist_err(io::Error::other(err)))?;

    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir).map_err(persist_err)?;
    temp.write_all(json.as_bytes()).map_err(persist_err)?;
    temp.flush().map_err(persist_err)?;

    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(persist_err)?;
    }

    temp.persist(path).map_err(|err| persist_err(err.error))?;

    debug!("Wrote {} items to {:?}", items.len(), path);
    Ok(())
}

#[cfg(test)]
mod store_test;
