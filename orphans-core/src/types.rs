//! Domain types for orphan file bootstrapping.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
//! All types are serializable/deserializable via serde + serde_yaml.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default orphans directory, relative to the project root.
pub const DEFAULT_ORPHANS_DIR: &str = "_orphans";

/// Default manifest file name, looked up at the project root.
pub const MANIFEST_FILE_NAME: &str = "orphans.yaml";

// ---------------------------------------------------------------------------
// MappingEntry
// ---------------------------------------------------------------------------

/// One configured (source, destination) pair.
///
/// Inside a [`Manifest`] the paths may be relative; [`Manifest::resolve`]
/// anchors them to a project root before they reach the synchronizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MappingEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub description: String,
}

impl MappingEntry {
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            description: description.into(),
        }
    }

    /// File name of the source, falling back to the full path.
    pub fn source_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}

impl fmt::Display for MappingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} -> {})",
            self.description,
            self.source.display(),
            self.destination.display()
        )
    }
}

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

fn default_orphans_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ORPHANS_DIR)
}

/// The ordered mapping set for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Directory holding the checked-in fallbacks. Relative to the root.
    #[serde(default = "default_orphans_dir")]
    pub orphans_dir: PathBuf,
    #[serde(default)]
    pub entries: Vec<MappingEntry>,
}

impl Manifest {
    /// The documentation site's two build-generated data files.
    pub fn default_manifest() -> Self {
        Self {
            orphans_dir: default_orphans_dir(),
            entries: vec![
                MappingEntry::new(
                    "componentSamples.json",
                    "pages/shared/data/componentSamples.json",
                    "Component samples mapping",
                ),
                MappingEntry::new(
                    "samples.json",
                    "examples/static/samples/samples.json",
                    "Samples metadata",
                ),
            ],
        }
    }

    /// Anchor every entry to `root`, preserving declaration order.
    ///
    /// Sources resolve against `orphans_dir`, which itself resolves against
    /// `root`; destinations resolve against `root`. Absolute paths are kept.
    pub fn resolve(&self, root: &Path) -> Vec<MappingEntry> {
        let orphans_dir = root.join(&self.orphans_dir);
        self.entries
            .iter()
            .map(|e| MappingEntry {
                source: orphans_dir.join(&e.source),
                destination: root.join(&e.destination),
                description: e.description.clone(),
            })
            .collect()
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::default_manifest()
    }
}
