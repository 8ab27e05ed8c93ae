//! The three curation transforms. All of them are pure functions over
//! in-memory records; loading and persisting live in [`crate::store`].

mod filter;
mod mark;
mod verify;
#[cfg(test)]
mod verify_test;

pub use filter::{FilterOutcome, filter_and_rename};
pub use mark::{MarkOutcome, is_proper_noun, mark_proper_nouns};
pub use verify::{Drift, DriftSource, duplicate_names, missing_categories, verify};

#[cfg(test)]
pub(crate) fn items_from_json(value: serde_json::Value) -> Vec<crate::models::Item> {
    match value {
        serde_json::Value::Array(values) => values
            .into_iter()
            .map(|v| crate::models::Item::try_from(v).expect("test item should be valid"))
            .collect(),
        other => panic!("expected an array of items, got {other}"),
    }
}

#[cfg(test)]
pub(crate) fn name_set(names: &[&str]) -> std::collections::BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}
