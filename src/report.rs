//! Console summaries printed by the curation binaries.

use crate::curation::Drift;
use crate::models::Dataset;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct CleanReport {
    pub dataset: Dataset,
    pub before: usize,
    pub after: usize,
    pub removed: Vec<String>,
    pub renamed: Vec<(String, String)>,
    pub drift: Vec<Drift>,
    /// Names shared by several items after renaming.
    pub collisions: Vec<String>,
    pub written: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkReport {
    pub dataset: Dataset,
    pub total: usize,
    pub marked: usize,
    pub cleared: usize,
    pub drift: Vec<Drift>,
    pub written: bool,
}

impl fmt::Display for CleanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Processing {}...", self.dataset)?;
        writeln!(
            f,
            "  {} → {} items ({} removed)",
            self.before,
            self.after,
            self.before - self.after
        )?;

        if !self.renamed.is_empty() {
            writeln!(f, "  Renamed {} items:", self.renamed.len())?;
            for (old, new) in &self.renamed {
                writeln!(f, "    {old} → {new}")?;
            }
        }

        if !self.removed.is_empty() {
            writeln!(f, "  Removed {} items:", self.removed.len())?;
            write_names(f, &self.removed)?;
        }

        write_drift(f, &self.drift)?;

        if !self.collisions.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "  WARNING: {} names carried by more than one item:",
                self.collisions.len()
            )?;
            write_names(f, &self.collisions)?;
        }

        write_dry_run(f, self.dataset, self.written)
    }
}

impl fmt::Display for MarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Marking proper nouns in {}...", self.dataset)?;
        writeln!(
            f,
            "  {}/{} items marked as proper nouns",
            self.marked, self.total
        )?;
        if self.cleared > 0 {
            writeln!(f, "  Cleared {} stale markers", self.cleared)?;
        }

        write_drift(f, &self.drift)?;
        write_dry_run(f, self.dataset, self.written)
    }
}

fn write_names(f: &mut fmt::Formatter<'_>, names: &[String]) -> fmt::Result {
    for name in names {
        writeln!(f, "    - {name}")?;
    }
    Ok(())
}

fn write_drift(f: &mut fmt::Formatter<'_>, drift: &[Drift]) -> fmt::Result {
    for entry in drift {
        writeln!(f)?;
        writeln!(
            f,
            "  WARNING: {} {} not found in data:",
            entry.missing.len(),
            entry.source
        )?;
        write_names(f, &entry.missing)?;
    }
    Ok(())
}

fn write_dry_run(f: &mut fmt::Formatter<'_>, dataset: Dataset, written: bool) -> fmt::Result {
    if !written {
        writeln!(f, "  (dry run: {dataset} not written)")?;
    }
    Ok(())
}
