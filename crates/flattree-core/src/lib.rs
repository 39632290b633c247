//! Core types and configuration for flattree.
//!
//! This crate provides the fundamental data structures used throughout
//! the flattree ecosystem: flatten configuration and plans, the
//! flattened-document model, per-run reports, and error types.

mod config;
mod document;
mod error;
mod report;

pub use config::{
    DEFAULT_EXCLUDED_NAMES, FlattenConfig, FlattenConfigBuilder, FlattenPlan, RootPolicy,
};
pub use document::{DocumentEntry, FlattenedDocument};
pub use error::{FlattenError, FlattenWarning, SkipKind};
pub use report::{FlattenReport, FlattenStats};
