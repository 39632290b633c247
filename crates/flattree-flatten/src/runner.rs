//! Sequential multi-target plan execution.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use flattree_core::{FlattenError, FlattenPlan, FlattenReport, RootPolicy};

use crate::flattener::TreeFlattener;

/// A target whose root could not be flattened under `RootPolicy::Skip`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootFailure {
    /// The configured root path.
    pub root: PathBuf,
    /// Rendered error message.
    pub error: String,
}

/// Result of running a whole plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanOutcome {
    /// One report per successfully flattened target, in plan order.
    pub reports: Vec<FlattenReport>,
    /// Targets skipped because their root was invalid.
    pub failures: Vec<RootFailure>,
}

impl PlanOutcome {
    /// True when every target produced an output file.
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run each target of the plan strictly in order.
///
/// Under `RootPolicy::Fail` the first per-root error aborts the plan.
/// Under `RootPolicy::Skip` the failure is recorded and the remaining
/// targets still run.
pub fn run_plan(plan: &FlattenPlan) -> Result<PlanOutcome, FlattenError> {
    let flattener = TreeFlattener::new();
    let mut reports = Vec::new();
    let mut failures = Vec::new();

    for target in &plan.targets {
        match flattener.flatten(target) {
            Ok(report) => reports.push(report),
            Err(err) => match plan.on_bad_root {
                RootPolicy::Fail => return Err(err),
                RootPolicy::Skip => {
                    tracing::warn!(
                        target: "flatten",
                        "skipping root {}: {err}",
                        target.root.display()
                    );
                    failures.push(RootFailure {
                        root: target.root.clone(),
                        error: err.to_string(),
                    });
                }
            },
        }
    }

    Ok(PlanOutcome { reports, failures })
}
