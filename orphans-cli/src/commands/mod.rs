pub mod init;
pub mod run;
pub mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

/// Project location flags shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root the manifest paths are relative to.
    #[arg(long, short = 'r', default_value = ".")]
    pub root: PathBuf,

    /// Manifest file (relative to the root). Defaults to `orphans.yaml`,
    /// or the built-in mappings when that file is absent.
    #[arg(long, short = 'm')]
    pub manifest: Option<PathBuf>,
}

impl ProjectArgs {
    /// Canonical project root.
    pub fn root(&self) -> Result<PathBuf> {
        self.root
            .canonicalize()
            .with_context(|| format!("cannot resolve project root '{}'", self.root.display()))
    }
}
