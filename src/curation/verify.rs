use crate::models::Item;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

/// Which part of a curation policy a drift report refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftSource {
    RemoveList,
    RenameList,
    ProperNouns,
    ProperCategories,
}

impl fmt::Display for DriftSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DriftSource::RemoveList => "items in remove list",
            DriftSource::RenameList => "items in rename list",
            DriftSource::ProperNouns => "names in proper set",
            DriftSource::ProperCategories => "categories in proper category rule",
        })
    }
}

/// Configured entries that match nothing in the live catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Drift {
    pub source: DriftSource,
    /// Sorted.
    pub missing: Vec<String>,
}

impl Drift {
    /// `None` when every configured entry was found.
    pub fn detect(source: DriftSource, missing: Vec<String>) -> Option<Drift> {
        (!missing.is_empty()).then_some(Drift { source, missing })
    }
}

/// Configured names with no record of that name, in sorted order.
pub fn verify(items: &[Item], configured: &BTreeSet<String>) -> Vec<String> {
    let present: HashSet<&str> = items.iter().map(Item::name).collect();
    configured
        .iter()
        .filter(|name| !present.contains(name.as_str()))
        .cloned()
        .collect()
}

/// Configured categories that no record belongs to, in sorted order.
pub fn missing_categories(items: &[Item], categories: &BTreeSet<String>) -> Vec<String> {
    let present: HashSet<&str> = items.iter().filter_map(Item::category).collect();
    categories
        .iter()
        .filter(|category| !present.contains(category.as_str()))
        .cloned()
        .collect()
}

/// Names carried by more than one record, in sorted order.
pub fn duplicate_names(items: &[Item]) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(item.name()).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name.to_string())
        .collect()
}
