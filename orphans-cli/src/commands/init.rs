//! `orphans init [--root DIR] [--force]`

use anyhow::{bail, Context, Result};
use clap::Args;

use orphans_core::{config, Manifest};

use super::ProjectArgs;

/// Write the default manifest.
#[derive(Args, Debug)]
pub struct InitArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Replace an existing manifest file.
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        let root = self.project.root()?;
        let path = match &self.project.manifest {
            Some(p) => root.join(p),
            None => config::manifest_path_at(&root),
        };

        if path.exists() && !self.force {
            bail!(
                "{} already exists; pass --force to replace it",
                path.display()
            );
        }

        let manifest = Manifest::default_manifest();
        config::save_at(&path, &manifest)
            .with_context(|| format!("failed to write manifest '{}'", path.display()))?;

        println!(
            "✓ Wrote {} mapping(s) to {}",
            manifest.entries.len(),
            path.display()
        );
        println!(
            "  Orphans directory: {}",
            root.join(&manifest.orphans_dir).display()
        );
        Ok(())
    }
}
