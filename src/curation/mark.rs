use crate::models::Item;
use log::debug;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub struct MarkOutcome {
    pub items: Vec<Item>,
    /// Records that now carry `proper_noun: true`.
    pub marked: usize,
    /// Records that lost a stale marker.
    pub cleared: usize,
}

impl MarkOutcome {
    pub fn total(&self) -> usize {
        self.items.len()
    }
}

/// An item is a proper noun when its category is covered by the category rule
/// or when it is named explicitly. Either condition is enough.
pub fn is_proper_noun(
    item: &Item,
    proper_nouns: &BTreeSet<String>,
    always_proper_categories: Option<&BTreeSet<String>>,
) -> bool {
    let by_category = match (always_proper_categories, item.category()) {
        (Some(categories), Some(category)) => categories.contains(category),
        _ => false,
    };
    by_category || proper_nouns.contains(item.name())
}

/// Set `proper_noun: true` on proper nouns and strip the field from
/// everything else. Names and record order are never changed.
pub fn mark_proper_nouns(
    mut items: Vec<Item>,
    proper_nouns: &BTreeSet<String>,
    always_proper_categories: Option<&BTreeSet<String>>,
) -> MarkOutcome {
    let mut marked = 0;
    let mut cleared = 0;

    for item in &mut items {
        if is_proper_noun(item, proper_nouns, always_proper_categories) {
            item.mark_proper_noun();
            marked += 1;
        } else if item.clear_proper_noun() {
            debug!("Cleared stale proper noun marker on `{}`", item.name());
            cleared += 1;
        }
    }

    MarkOutcome {
        items,
        marked,
        cleared,
    }
}
