//! Per-entry outcomes and run-level aggregation.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use orphans_core::MappingEntry;

/// What happened to a single mapping entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Source copied to a previously absent destination.
    Copied { bytes: u64 },
    /// Destination already present; left untouched.
    SkippedExists,
    /// Source absent; nothing to copy.
    SkippedMissingSource,
    /// Directory creation or copy failed.
    Failed { reason: String },
    /// Dry run: the entry would have been copied.
    WouldCopy,
}

impl Outcome {
    /// Short machine-friendly label.
    pub fn key(&self) -> &'static str {
        match self {
            Outcome::Copied { .. } => "copied",
            Outcome::SkippedExists => "skipped_exists",
            Outcome::SkippedMissingSource => "skipped_missing_source",
            Outcome::Failed { .. } => "failed",
            Outcome::WouldCopy => "would_copy",
        }
    }
}

/// An entry paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryOutcome {
    pub entry: MappingEntry,
    pub outcome: Outcome,
}

/// Aggregate counters for a run.
///
/// `skipped` covers both "destination exists" and "source missing".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunCounts {
    pub copied: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Result of one bootstrap run.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub counts: RunCounts,
    pub outcomes: Vec<EntryOutcome>,
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
}

impl RunResult {
    pub(crate) fn new(outcomes: Vec<EntryOutcome>, dry_run: bool, started_at: DateTime<Utc>) -> Self {
        let mut counts = RunCounts::default();
        for o in &outcomes {
            match o.outcome {
                Outcome::Copied { .. } | Outcome::WouldCopy => counts.copied += 1,
                Outcome::SkippedExists | Outcome::SkippedMissingSource => counts.skipped += 1,
                Outcome::Failed { .. } => counts.failed += 1,
            }
        }
        Self {
            counts,
            outcomes,
            dry_run,
            started_at,
        }
    }

    pub fn skipped_existing(&self) -> usize {
        self.count_where(|o| *o == Outcome::SkippedExists)
    }

    pub fn skipped_missing_source(&self) -> usize {
        self.count_where(|o| *o == Outcome::SkippedMissingSource)
    }

    /// True when any entry was (or, in a dry run, would be) copied.
    pub fn did_work(&self) -> bool {
        self.counts.copied > 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, Outcome::Failed { .. }))
    }

    pub fn summary(&self) -> Summary {
        let RunCounts {
            copied, skipped, ..
        } = self.counts;
        if copied == 0 {
            Summary::NothingNeeded
        } else if skipped == 0 {
            Summary::Bootstrapped { copied }
        } else {
            Summary::BootstrappedWithSkips { copied, skipped }
        }
    }

    fn count_where(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.outcome)).count()
    }
}

/// The one-line, user-facing verdict for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    NothingNeeded,
    Bootstrapped { copied: usize },
    BootstrappedWithSkips { copied: usize, skipped: usize },
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::NothingNeeded => f.write_str("no orphan files needed to be bootstrapped"),
            Summary::Bootstrapped { copied } => {
                write!(f, "{copied} orphan file(s) bootstrapped")
            }
            Summary::BootstrappedWithSkips { copied, skipped } => {
                write!(f, "{copied} orphan file(s) bootstrapped, {skipped} skipped")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> MappingEntry {
        MappingEntry::new(format!("{name}.json"), format!("out/{name}.json"), name)
    }

    fn result(outcomes: Vec<Outcome>) -> RunResult {
        let outcomes = outcomes
            .into_iter()
            .enumerate()
            .map(|(i, outcome)| EntryOutcome {
                entry: entry(&format!("e{i}")),
                outcome,
            })
            .collect();
        RunResult::new(outcomes, false, Utc::now())
    }

    #[test]
    fn counts_split_by_outcome() {
        let r = result(vec![
            Outcome::Copied { bytes: 3 },
            Outcome::SkippedExists,
            Outcome::SkippedMissingSource,
            Outcome::Failed {
                reason: "boom".into(),
            },
        ]);
        assert_eq!(
            r.counts,
            RunCounts {
                copied: 1,
                skipped: 2,
                failed: 1
            }
        );
        assert_eq!(r.skipped_existing(), 1);
        assert_eq!(r.skipped_missing_source(), 1);
        assert_eq!(r.failures().count(), 1);
    }

    #[test]
    fn summary_wording() {
        assert_eq!(
            result(vec![]).summary().to_string(),
            "no orphan files needed to be bootstrapped"
        );
        assert_eq!(
            result(vec![Outcome::SkippedExists]).summary(),
            Summary::NothingNeeded
        );
        assert_eq!(
            result(vec![Outcome::Copied { bytes: 1 }, Outcome::Copied { bytes: 1 }])
                .summary()
                .to_string(),
            "2 orphan file(s) bootstrapped"
        );
        assert_eq!(
            result(vec![Outcome::Copied { bytes: 1 }, Outcome::SkippedMissingSource])
                .summary()
                .to_string(),
            "1 orphan file(s) bootstrapped, 1 skipped"
        );
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(Outcome::Copied { bytes: 7 }).unwrap();
        assert_eq!(json["status"], "copied");
        assert_eq!(json["bytes"], 7);
        let json = serde_json::to_value(Outcome::SkippedMissingSource).unwrap();
        assert_eq!(json["status"], "skipped_missing_source");
    }
}
