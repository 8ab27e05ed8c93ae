//! Parse curation policy YAML documents.

use super::CurationPolicy;
use crate::error::{CurationError, Result};
use log::warn;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyDocument {
    #[serde(default)]
    remove: Vec<String>,

    #[serde(default)]
    rename: BTreeMap<String, String>,

    #[serde(default)]
    proper_nouns: Vec<String>,

    #[serde(default)]
    always_proper_categories: Option<Vec<String>>,
}

/// Load the policy file for one dataset.
pub fn load_policy(path: &Path) -> Result<CurationPolicy> {
    let content = fs::read_to_string(path).map_err(|source| CurationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_policy(&content, path)
}

/// Parse policy text. `origin` only labels errors and warnings.
pub fn parse_policy(content: &str, origin: &Path) -> Result<CurationPolicy> {
    let document: PolicyDocument = if content.trim().is_empty() {
        PolicyDocument::default()
    } else {
        serde_yaml::from_str(content).map_err(|source| CurationError::Policy {
            path: origin.to_path_buf(),
            source,
        })?
    };

    let policy = CurationPolicy {
        remove: collect_names(document.remove, "remove", origin),
        rename: document.rename,
        proper_nouns: collect_names(document.proper_nouns, "proper_nouns", origin),
        always_proper_categories: document
            .always_proper_categories
            .map(|categories| collect_names(categories, "always_proper_categories", origin)),
    };

    validate_policy(&policy, origin);
    Ok(policy)
}

fn collect_names(names: Vec<String>, list: &str, origin: &Path) -> BTreeSet<String> {
    let mut set = BTreeSet::new();
    for name in names {
        if let Some(duplicate) = set.replace(name) {
            warn!("{:?}: `{}` listed more than once in {}", origin, duplicate, list);
        }
    }
    set
}

fn validate_policy(policy: &CurationPolicy, origin: &Path) {
    for name in policy.remove_and_rename_overlap() {
        warn!(
            "{:?}: `{}` is both removed and renamed; removal takes precedence",
            origin, name
        );
    }

    for (old, new) in &policy.rename {
        if old == new {
            warn!("{:?}: rename of `{}` maps the name onto itself", origin, old);
        } else if policy.rename.contains_key(new) {
            warn!(
                "{:?}: rename `{}` -> `{}` targets another renamed name; reruns will not be stable",
                origin, old, new
            );
        }
    }
}
