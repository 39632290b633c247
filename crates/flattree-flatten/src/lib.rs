//! Tree traversal and flattening engine for flattree.
//!
//! This crate walks a directory tree, reads each non-excluded file as
//! UTF-8 text (invalid sequences replaced, never fatal), and writes one
//! concatenated `source-<name>.txt` document per root.
//!
//! # Overview
//!
//! - **Serial traversal** via jwalk (no parallelism by design)
//! - **Per-file resilience**: an unreadable file is skipped with a
//!   structured warning, the run always completes
//! - **Single write**: the document is assembled in memory and written
//!   atomically with respect to partial content
//!
//! # Example
//!
//! ```rust,no_run
//! use flattree_flatten::{FlattenConfig, TreeFlattener};
//!
//! let config = FlattenConfig::new("/path/to/project", "project");
//! let report = TreeFlattener::new().flatten(&config).unwrap();
//!
//! println!("{} entries written to {}", report.entry_count(), report.output_path.display());
//! ```
//!
//! # Multiple roots
//!
//! Several targets run strictly in sequence through a plan:
//!
//! ```rust,no_run
//! use flattree_flatten::{run_plan, FlattenConfig, FlattenPlan, RootPolicy};
//!
//! let plan = FlattenPlan::new(vec![
//!     FlattenConfig::new("app/src", "app"),
//!     FlattenConfig::new("app/resources", "res"),
//! ])
//! .with_policy(RootPolicy::Skip);
//!
//! let outcome = run_plan(&plan).unwrap();
//! ```

mod flattener;
mod runner;

pub use flattener::TreeFlattener;
pub use runner::{PlanOutcome, RootFailure, run_plan};

// Re-export core types for convenience
pub use flattree_core::{
    DocumentEntry, FlattenConfig, FlattenError, FlattenPlan, FlattenReport, FlattenStats,
    FlattenWarning, FlattenedDocument, RootPolicy, SkipKind,
};
