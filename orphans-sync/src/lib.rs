//! # orphans-sync
//!
//! Never-overwrite bootstrap of orphan files into a development tree.
//!
//! Call [`synchronize`] with resolved [`MappingEntry`] values and a
//! [`BootstrapLogger`], or [`pipeline::bootstrap_at`] to load a manifest from
//! a project root first.

pub mod error;
pub mod logger;
pub mod outcome;
pub mod pipeline;
pub mod synchronizer;

pub use error::SyncError;
pub use logger::{BootstrapLogger, Level, LogLogger, MemoryLogger, NullLogger};
pub use orphans_core::MappingEntry;
pub use outcome::{EntryOutcome, Outcome, RunCounts, RunResult, Summary};
pub use synchronizer::{synchronize, synchronize_with, SyncOptions};
