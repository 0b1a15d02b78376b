//! `orphans run`: copy missing orphan files into place.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use orphans_sync::{pipeline, LogLogger, Outcome, RunResult, SyncOptions};

use super::ProjectArgs;

/// Arguments for `orphans run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Show what would be copied without writing any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Emit the run result as JSON on stdout.
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    pub fn run(self) -> Result<()> {
        let root = self.project.root()?;
        tracing::debug!("project root: {}", root.display());

        let options = SyncOptions {
            dry_run: self.dry_run,
        };
        let result = pipeline::bootstrap_at(
            &root,
            self.project.manifest.as_deref(),
            options,
            &LogLogger,
        )
        .with_context(|| format!("bootstrap failed for '{}'", root.display()))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result).context("failed to serialize run result")?
            );
        } else {
            print_results(&result);
        }
        Ok(())
    }
}

fn print_results(result: &RunResult) {
    let prefix = if result.dry_run { "[dry-run] " } else { "" };
    let mark = if result.counts.failed > 0 {
        "!".yellow().bold()
    } else {
        "✓".green().bold()
    };
    println!("{prefix}{mark} {}", result.summary());

    for o in &result.outcomes {
        let dest = o.entry.destination.display();
        match &o.outcome {
            Outcome::Copied { bytes } => println!("  {}  {dest} ({bytes} bytes)", "✎".green()),
            Outcome::WouldCopy => println!("  {}  {dest}", "~".cyan()),
            Outcome::SkippedExists => println!("  {}  {dest}", "·".bright_black()),
            Outcome::SkippedMissingSource => println!(
                "  {}  {dest} (no orphan at {})",
                "?".yellow(),
                o.entry.source.display()
            ),
            Outcome::Failed { reason } => println!("  {}  {dest}: {reason}", "✗".red()),
        }
    }

    if result.counts.failed > 0 {
        println!(
            "{} file(s) could not be copied and need manual attention.",
            result.counts.failed
        );
    }
}
