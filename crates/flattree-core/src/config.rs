//! Flatten configuration types.

use std::path::PathBuf;

use compact_str::CompactString;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// File names skipped unconditionally when no explicit set is given.
pub const DEFAULT_EXCLUDED_NAMES: &[&str] = &[".DS_Store"];

/// Configuration for one flatten invocation.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct FlattenConfig {
    /// Root path to flatten.
    pub root: PathBuf,

    /// Short identifier used to derive the output file name.
    pub output_name: CompactString,

    /// Directory the output file is written into.
    #[builder(default = "PathBuf::from(\".\")")]
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File names skipped unconditionally, wherever they appear.
    #[builder(default = "default_excluded_names()")]
    #[serde(default = "default_excluded_names")]
    pub excluded_names: Vec<CompactString>,

    /// Sort entries by relative path before rendering.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub sort_entries: bool,

    /// Maximum depth to traverse (None = unlimited).
    #[builder(default)]
    #[serde(default)]
    pub max_depth: Option<u32>,
}

fn default_true() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_excluded_names() -> Vec<CompactString> {
    DEFAULT_EXCLUDED_NAMES
        .iter()
        .map(|n| CompactString::new(n))
        .collect()
}

impl FlattenConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        if let Some(ref name) = self.output_name {
            if name.is_empty() {
                return Err("Output name cannot be empty".to_string());
            }
        } else {
            return Err("Output name is required".to_string());
        }
        Ok(())
    }
}

impl FlattenConfig {
    /// Create a new flatten config builder.
    pub fn builder() -> FlattenConfigBuilder {
        FlattenConfigBuilder::default()
    }

    /// Create a simple config for flattening a root under a given name.
    pub fn new(root: impl Into<PathBuf>, output_name: impl Into<CompactString>) -> Self {
        Self {
            root: root.into(),
            output_name: output_name.into(),
            output_dir: default_output_dir(),
            excluded_names: default_excluded_names(),
            sort_entries: true,
            max_depth: None,
        }
    }

    /// Check if a file name matches the excluded-names set exactly.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_names.iter().any(|n| n == name)
    }

    /// Derived name of the destination file.
    pub fn output_file_name(&self) -> String {
        format!("source-{}.txt", self.output_name)
    }

    /// Full path of the destination file.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(self.output_file_name())
    }
}

/// Policy applied when a plan target's root is missing or not a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootPolicy {
    /// Abort the whole plan on the first bad root.
    #[default]
    Fail,
    /// Record the failure and continue with the next target.
    Skip,
}

/// An ordered list of flatten targets executed sequentially.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlattenPlan {
    /// Targets, run in order.
    pub targets: Vec<FlattenConfig>,

    /// What to do when a target's root is invalid.
    #[serde(default)]
    pub on_bad_root: RootPolicy,
}

impl FlattenPlan {
    /// Create a plan from a list of targets with the default policy.
    pub fn new(targets: Vec<FlattenConfig>) -> Self {
        Self {
            targets,
            on_bad_root: RootPolicy::default(),
        }
    }

    /// Set the bad-root policy.
    pub fn with_policy(mut self, policy: RootPolicy) -> Self {
        self.on_bad_root = policy;
        self
    }
}
