//! The orphan file synchronizer.
//!
//! ## Per-entry protocol
//!
//! 1. Source missing → `SkippedMissingSource` (warn).
//! 2. Destination present → `SkippedExists` (debug).
//! 3. Dry run → `WouldCopy`, nothing written.
//! 4. Create destination ancestors.
//! 5. Open destination with `create_new` and stream the source into it.
//! 6. Any I/O error → `Failed`, partial destination removed, keep going.
//!
//! An existing destination is never opened for writing.

use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use chrono::Utc;

use orphans_core::{config::validate_entries, MappingEntry};

use crate::error::{io_err, SyncError};
use crate::logger::BootstrapLogger;
use crate::outcome::{EntryOutcome, Outcome, RunResult};

/// Knobs for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Report what would be copied without touching the filesystem.
    pub dry_run: bool,
}

/// Copy every entry whose source exists and whose destination does not.
///
/// Fails only when `entries` is invalid; per-entry errors are recorded in the
/// returned [`RunResult`].
pub fn synchronize(
    entries: &[MappingEntry],
    logger: &dyn BootstrapLogger,
) -> Result<RunResult, SyncError> {
    synchronize_with(entries, logger, SyncOptions::default())
}

/// [`synchronize`] with explicit [`SyncOptions`].
pub fn synchronize_with(
    entries: &[MappingEntry],
    logger: &dyn BootstrapLogger,
    options: SyncOptions,
) -> Result<RunResult, SyncError> {
    validate_entries(entries)?;

    let started_at = Utc::now();
    let prefix = if options.dry_run { "[dry-run] " } else { "" };
    logger.info(&format!(
        "{prefix}bootstrapping orphan files for development environment..."
    ));

    let outcomes = entries
        .iter()
        .map(|entry| EntryOutcome {
            entry: entry.clone(),
            outcome: process_entry(entry, logger, options.dry_run),
        })
        .collect();

    let result = RunResult::new(outcomes, options.dry_run, started_at);
    log_summary(&result, logger);
    Ok(result)
}

fn process_entry(entry: &MappingEntry, logger: &dyn BootstrapLogger, dry_run: bool) -> Outcome {
    if !entry.source.exists() {
        logger.warn(&format!("orphan file not found: {}", entry.source_name()));
        return Outcome::SkippedMissingSource;
    }

    if entry.destination.exists() {
        logger.debug(&format!(
            "skipping {}: file already exists",
            entry.description
        ));
        return Outcome::SkippedExists;
    }

    if dry_run {
        logger.info(&format!(
            "[dry-run] would copy {} to {}",
            entry.description,
            entry.destination.display()
        ));
        return Outcome::WouldCopy;
    }

    match copy_new(&entry.source, &entry.destination) {
        Ok(Some(bytes)) => {
            logger.success(&format!("copied {}", entry.description));
            Outcome::Copied { bytes }
        }
        Ok(None) => {
            logger.debug(&format!(
                "skipping {}: file appeared before copy",
                entry.description
            ));
            Outcome::SkippedExists
        }
        Err(e) => {
            let reason = e.to_string();
            logger.error(&format!("failed to copy {}: {reason}", entry.description));
            Outcome::Failed { reason }
        }
    }
}

/// Stream `source` into a freshly created `destination`.
///
/// Returns `Ok(None)` if `destination` already exists at open time.
fn copy_new(source: &Path, destination: &Path) -> Result<Option<u64>, SyncError> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
    }

    let mut reader = File::open(source).map_err(|e| io_err(source, e))?;
    let mut writer = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(destination)
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(None),
        Err(e) => return Err(io_err(destination, e)),
    };

    let copied = io::copy(&mut reader, &mut writer).and_then(|n| writer.flush().map(|_| n));
    match copied {
        Ok(n) => Ok(Some(n)),
        Err(e) => {
            // We created this file; don't leave a truncated one behind.
            drop(writer);
            Err(discard_partial(destination, e, fs::remove_file(destination)))
        }
    }
}

/// Error for a failed copy, naming the leftover file when `cleanup` failed.
fn discard_partial(destination: &Path, copy: io::Error, cleanup: io::Result<()>) -> SyncError {
    match cleanup {
        Ok(()) => io_err(destination, copy),
        Err(cleanup) => SyncError::PartialCopy {
            path: destination.to_path_buf(),
            source: copy,
            cleanup,
        },
    }
}

fn log_summary(result: &RunResult, logger: &dyn BootstrapLogger) {
    let prefix = if result.dry_run { "[dry-run] " } else { "" };
    let copied = result.counts.copied;
    let existing = result.skipped_existing();

    if copied > 0 {
        logger.complete(&format!("{prefix}{}", result.summary()));
    }
    if existing > 0 {
        logger.info(&format!("{prefix}skipped {existing} existing file(s)"));
    }
    if copied == 0 && existing == 0 {
        logger.info(&format!("{prefix}no orphan files needed to be bootstrapped"));
    }
    if result.counts.failed > 0 {
        logger.warn(&format!(
            "{} orphan file(s) failed to copy; fix the errors above and re-run",
            result.counts.failed
        ));
    }
}
