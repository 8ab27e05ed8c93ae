use crate::models::Item;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Result of the filter/rename pass over one catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// Surviving records, in their original relative order.
    pub items: Vec<Item>,
    /// Record count before the pass.
    pub before: usize,
    /// Names of dropped records, in dataset order.
    pub removed: Vec<String>,
    /// `(old, new)` pairs, in dataset order.
    pub renamed: Vec<(String, String)>,
}

impl FilterOutcome {
    pub fn after(&self) -> usize {
        self.items.len()
    }
}

/// Drop every record named in `remove`, then rename records named in `rename`.
///
/// Removal is checked first, so a name configured for both is removed and its
/// rename never happens. Names that match no record are ignored here.
pub fn filter_and_rename(
    items: Vec<Item>,
    remove: &BTreeSet<String>,
    rename: &BTreeMap<String, String>,
) -> FilterOutcome {
    let before = items.len();
    let mut removed = Vec::new();
    let mut renamed = Vec::new();
    let mut kept = Vec::with_capacity(before);

    for mut item in items {
        if remove.contains(item.name()) {
            debug!("Removing `{}`", item.name());
            removed.push(item.name().to_string());
            continue;
        }

        if let Some(new_name) = rename.get(item.name()) {
            debug!("Renaming `{}` to `{}`", item.name(), new_name);
            renamed.push((item.name().to_string(), new_name.clone()));
            item.rename(new_name);
        }

        kept.push(item);
    }

    FilterOutcome {
        items: kept,
        before,
        removed,
        renamed,
    }
}
