//! Shared bootstrap entrypoint used by the CLI and dev-server harnesses.

use std::path::Path;

use orphans_core::{config, Manifest, MappingEntry};

use crate::error::io_err;
use crate::logger::{BootstrapLogger, LogLogger};
use crate::synchronizer::{synchronize_with, SyncOptions};
use crate::{RunResult, SyncError};

/// Load the manifest for `root`.
///
/// An explicit `manifest_path` must exist; otherwise `<root>/orphans.yaml` is
/// used when present, falling back to the built-in defaults.
pub fn load_manifest(root: &Path, manifest_path: Option<&Path>) -> Result<Manifest, SyncError> {
    let manifest = match manifest_path {
        Some(path) => config::load_at(&root.join(path))?,
        None => config::discover_at(root)?,
    };
    Ok(manifest)
}

/// Resolved, root-anchored entries for `root`.
pub fn resolve_entries(
    root: &Path,
    manifest_path: Option<&Path>,
) -> Result<Vec<MappingEntry>, SyncError> {
    Ok(load_manifest(root, manifest_path)?.resolve(root))
}

/// Run the bootstrap for a project root.
///
/// This is the canonical entrypoint for `orphans run` and `orphans status`.
pub fn bootstrap_at(
    root: &Path,
    manifest_path: Option<&Path>,
    options: SyncOptions,
    logger: &dyn BootstrapLogger,
) -> Result<RunResult, SyncError> {
    let entries = resolve_entries(root, manifest_path)?;
    synchronize_with(&entries, logger, options)
}

/// Bootstrap the current directory with the default manifest lookup,
/// logging through the `log` facade.
pub fn bootstrap() -> Result<RunResult, SyncError> {
    let root = std::env::current_dir().map_err(|e| io_err(".", e))?;
    bootstrap_at(&root, None, SyncOptions::default(), &LogLogger)
}
