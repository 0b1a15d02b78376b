//! `orphans status`: per-mapping visibility without touching the tree.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use orphans_sync::{pipeline, EntryOutcome, NullLogger, Outcome, RunResult, SyncOptions};

use super::ProjectArgs;

/// Arguments for `orphans status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl StatusArgs {
    pub fn run(self) -> Result<()> {
        let root = self.project.root()?;
        let plan = pipeline::bootstrap_at(
            &root,
            self.project.manifest.as_deref(),
            SyncOptions { dry_run: true },
            &NullLogger,
        )
        .with_context(|| format!("failed to inspect '{}'", root.display()))?;

        if self.json {
            print_json(&plan)?;
            return Ok(());
        }

        print_table(&plan);
        Ok(())
    }
}

#[derive(Serialize)]
struct MappingStatusJson {
    description: String,
    source: String,
    destination: String,
    source_present: bool,
    destination_present: bool,
    action: &'static str,
}

#[derive(Tabled)]
struct MappingStatusRow {
    #[tabled(rename = "mapping")]
    description: String,
    #[tabled(rename = "source")]
    source: String,
    #[tabled(rename = "destination")]
    destination: String,
    #[tabled(rename = "action")]
    action: String,
}

fn action_key(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::WouldCopy | Outcome::Copied { .. } => "copy",
        Outcome::SkippedExists => "present",
        Outcome::SkippedMissingSource => "no_orphan",
        Outcome::Failed { .. } => "error",
    }
}

/// `(source_present, destination_present)` as observed by the dry run.
fn presence(outcome: &Outcome) -> (bool, bool) {
    match outcome {
        Outcome::WouldCopy | Outcome::Failed { .. } => (true, false),
        Outcome::Copied { .. } | Outcome::SkippedExists => (true, true),
        Outcome::SkippedMissingSource => (false, false),
    }
}

fn action_label(outcome: &Outcome) -> String {
    match outcome {
        Outcome::WouldCopy | Outcome::Copied { .. } => "COPY".cyan().bold().to_string(),
        Outcome::SkippedExists => "PRESENT".green().to_string(),
        Outcome::SkippedMissingSource => "NO ORPHAN".yellow().to_string(),
        Outcome::Failed { .. } => "ERROR".red().bold().to_string(),
    }
}

fn print_json(plan: &RunResult) -> Result<()> {
    let payload: Vec<MappingStatusJson> = plan
        .outcomes
        .iter()
        .map(|EntryOutcome { entry, outcome }| MappingStatusJson {
            description: entry.description.clone(),
            source: entry.source.display().to_string(),
            destination: entry.destination.display().to_string(),
            source_present: presence(outcome).0,
            destination_present: presence(outcome).1,
            action: action_key(outcome),
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize status JSON")?
    );
    Ok(())
}

fn print_table(plan: &RunResult) {
    println!(
        "Orphans v{} | {} mappings | {} to copy",
        env!("CARGO_PKG_VERSION"),
        plan.outcomes.len(),
        plan.counts.copied,
    );

    if plan.outcomes.is_empty() {
        println!("No mappings configured.");
        return;
    }

    let rows: Vec<MappingStatusRow> = plan
        .outcomes
        .iter()
        .map(|o| MappingStatusRow {
            description: o.entry.description.clone(),
            source: o.entry.source_name(),
            destination: o.entry.destination.display().to_string(),
            action: action_label(&o.outcome),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    if plan.did_work() {
        println!("Run 'orphans run' to bootstrap the missing files.");
    }
}
