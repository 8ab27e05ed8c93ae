//! Curation policy: which names to remove, rename and mark.

pub mod loader;

pub use loader::*;

use crate::models::Dataset;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Curation rules for a single dataset, loaded from `config/<dataset>.yaml`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurationPolicy {
    pub remove: BTreeSet<String>,
    pub rename: BTreeMap<String, String>,
    pub proper_nouns: BTreeSet<String>,
    /// Categories whose every item is a proper noun. `None` disables the rule.
    pub always_proper_categories: Option<BTreeSet<String>>,
}

impl CurationPolicy {
    /// Names configured for both removal and rename. Removal wins for these.
    pub fn remove_and_rename_overlap(&self) -> Vec<&str> {
        self.rename
            .keys()
            .filter(|name| self.remove.contains(*name))
            .map(String::as_str)
            .collect()
    }

    pub fn rename_sources(&self) -> BTreeSet<String> {
        self.rename.keys().cloned().collect()
    }
}

pub fn load_dataset_policy(config_dir: &Path, dataset: Dataset) -> crate::Result<CurationPolicy> {
    load_policy(&config_dir.join(dataset.policy_file_name()))
}
