//! YAML manifest loading, discovery, and validation.
//!
//! # Lookup
//!
//! ```text
//! <root>/
//!   orphans.yaml        (optional: built-in defaults apply when absent)
//!   _orphans/           (checked-in fallbacks, `orphans_dir` in the manifest)
//! ```
//!
//! Every loader takes an explicit path or root so tests can point it at a
//! `TempDir`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{invalid, ConfigError};
use crate::types::{Manifest, MappingEntry, MANIFEST_FILE_NAME};

// ---------------------------------------------------------------------------
// 1. Paths
// ---------------------------------------------------------------------------

/// `<root>/orphans.yaml`: pure, no I/O.
pub fn manifest_path_at(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILE_NAME)
}

// ---------------------------------------------------------------------------
// 2. Load
// ---------------------------------------------------------------------------

/// Load and validate the manifest at `path`.
///
/// Returns `ConfigError::NotFound` if absent,
/// `ConfigError::Parse` (with path + line context) if malformed YAML,
/// `ConfigError::Invalid` if an entry fails [`validate_fields`].
///
/// Self-copies and duplicate destinations depend on the project root, so
/// they are only caught once the manifest is resolved.
pub fn load_at(path: &Path) -> Result<Manifest, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    let manifest: Manifest = serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate_fields(&manifest.entries)?;
    Ok(manifest)
}

/// Load `<root>/orphans.yaml`, or fall back to [`Manifest::default_manifest`].
pub fn discover_at(root: &Path) -> Result<Manifest, ConfigError> {
    let path = manifest_path_at(root);
    if path.exists() {
        load_at(&path)
    } else {
        Ok(Manifest::default_manifest())
    }
}

// ---------------------------------------------------------------------------
// 3. Save
// ---------------------------------------------------------------------------

/// Write `manifest` to `path` atomically.
///
/// Write flow: serialize → `<name>.tmp` sibling → `rename`.
pub fn save_at(path: &Path, manifest: &Manifest) -> Result<(), ConfigError> {
    validate_fields(&manifest.entries)?;
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| invalid(format!("manifest path has no file name: {}", path.display())))?;
    let tmp_path = path.with_file_name(format!("{file_name}.tmp"));

    let yaml = serde_yaml::to_string(manifest)?;
    std::fs::write(&tmp_path, yaml)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// 4. Validate
// ---------------------------------------------------------------------------

/// Root-independent checks: empty paths, blank description.
pub fn validate_fields(entries: &[MappingEntry]) -> Result<(), ConfigError> {
    for (idx, entry) in entries.iter().enumerate() {
        if entry.source.as_os_str().is_empty() {
            return Err(invalid(format!("entry {idx} has an empty source path")));
        }
        if entry.destination.as_os_str().is_empty() {
            return Err(invalid(format!("entry {idx} has an empty destination path")));
        }
        if entry.description.trim().is_empty() {
            return Err(invalid(format!("entry {idx} has an empty description")));
        }
    }
    Ok(())
}

/// Reject resolved mapping sets that cannot be synchronized safely.
///
/// `entries` must already be anchored (see [`Manifest::resolve`]). Checked in
/// order, first failure wins: [`validate_fields`], source equal to
/// destination, duplicate destination.
pub fn validate_entries(entries: &[MappingEntry]) -> Result<(), ConfigError> {
    validate_fields(entries)?;
    let mut destinations = HashSet::new();
    for entry in entries {
        if entry.source == entry.destination {
            return Err(invalid(format!(
                "'{}' copies {} onto itself",
                entry.description,
                entry.source.display()
            )));
        }
        if !destinations.insert(&entry.destination) {
            return Err(invalid(format!(
                "destination {} is mapped more than once",
                entry.destination.display()
            )));
        }
    }
    Ok(())
}
