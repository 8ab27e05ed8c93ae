//! Per-dataset runs: load the policy and catalog, apply a pass, report drift
//! and persist the result.

use crate::curation::{
    Drift, DriftSource, duplicate_names, filter_and_rename, mark_proper_nouns,
    missing_categories, verify,
};
use crate::error::Result;
use crate::models::{Dataset, Item};
use crate::policy::load_dataset_policy;
use crate::report::{CleanReport, MarkReport};
use crate::store::{load_items, save_items};
use log::{info, warn};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub data_dir: PathBuf,
    pub config_dir: PathBuf,
    pub datasets: Vec<Dataset>,
    /// Compute and report everything but leave the catalogs untouched.
    pub dry_run: bool,
}

impl RunOptions {
    pub fn dataset_path(&self, dataset: Dataset) -> PathBuf {
        self.data_dir.join(dataset.file_name())
    }
}

/// Run the filter/rename pass on one catalog.
///
/// Remove and rename lists are verified against the names as loaded, before
/// any record is dropped or renamed.
pub fn clean_dataset(options: &RunOptions, dataset: Dataset) -> Result<CleanReport> {
    let policy = load_dataset_policy(&options.config_dir, dataset)?;
    let path = options.dataset_path(dataset);
    let items = load_items(&path)?;
    info!("Cleaning {} ({} items)", dataset, items.len());

    let drift: Vec<Drift> = [
        Drift::detect(DriftSource::RemoveList, verify(&items, &policy.remove)),
        Drift::detect(
            DriftSource::RenameList,
            verify(&items, &policy.rename_sources()),
        ),
    ]
    .into_iter()
    .flatten()
    .collect();
    log_drift(dataset, &drift);

    let outcome = filter_and_rename(items, &policy.remove, &policy.rename);

    let collisions = duplicate_names(&outcome.items);
    for name in &collisions {
        warn!("{}: `{}` is carried by more than one item", dataset, name);
    }

    let written = persist(options, &path, &outcome.items)?;

    Ok(CleanReport {
        dataset,
        before: outcome.before,
        after: outcome.after(),
        removed: outcome.removed,
        renamed: outcome.renamed,
        drift,
        collisions,
        written,
    })
}

/// Run the proper-noun marking pass on one catalog.
pub fn mark_dataset(options: &RunOptions, dataset: Dataset) -> Result<MarkReport> {
    let policy = load_dataset_policy(&options.config_dir, dataset)?;
    let path = options.dataset_path(dataset);
    let items = load_items(&path)?;
    info!("Marking proper nouns in {} ({} items)", dataset, items.len());

    let mut drift: Vec<Drift> =
        Drift::detect(DriftSource::ProperNouns, verify(&items, &policy.proper_nouns))
            .into_iter()
            .collect();
    if let Some(categories) = &policy.always_proper_categories {
        drift.extend(Drift::detect(
            DriftSource::ProperCategories,
            missing_categories(&items, categories),
        ));
    }
    log_drift(dataset, &drift);

    let outcome = mark_proper_nouns(
        items,
        &policy.proper_nouns,
        policy.always_proper_categories.as_ref(),
    );

    let written = persist(options, &path, &outcome.items)?;

    Ok(MarkReport {
        dataset,
        total: outcome.total(),
        marked: outcome.marked,
        cleared: outcome.cleared,
        drift,
        written,
    })
}

fn persist(options: &RunOptions, path: &Path, items: &[Item]) -> Result<bool> {
    if options.dry_run {
        info!("Dry run: leaving {:?} untouched", path);
        return Ok(false);
    }
    save_items(path, items)?;
    Ok(true)
}

fn log_drift(dataset: Dataset, drift: &[Drift]) {
    for entry in drift {
        warn!(
            "{}: {} {} not found in data",
            dataset,
            entry.missing.len(),
            entry.source
        );
    }
}
