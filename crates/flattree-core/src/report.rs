//! Per-invocation report and statistics.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use crate::config::FlattenConfig;
use crate::error::FlattenWarning;

/// Counters accumulated over one flatten invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlattenStats {
    /// Files that produced a document entry.
    pub files_flattened: u64,
    /// Files skipped because they could not be read.
    pub files_skipped: u64,
    /// Files skipped by the excluded-names set.
    pub files_excluded: u64,
    /// Directories visited.
    pub dirs_visited: u64,
    /// Total bytes read from flattened files.
    pub bytes_read: u64,
    /// Maximum depth reached, root = 0.
    pub max_depth: u32,
}

impl FlattenStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a flattened file.
    pub fn record_file(&mut self, size: u64, depth: u32) {
        self.files_flattened += 1;
        self.bytes_read += size;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Record a visited directory.
    pub fn record_dir(&mut self, depth: u32) {
        self.dirs_visited += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Record an unreadable, skipped file.
    pub fn record_skip(&mut self) {
        self.files_skipped += 1;
    }

    /// Record a file suppressed by the excluded-names set.
    pub fn record_excluded(&mut self) {
        self.files_excluded += 1;
    }
}

/// Complete result of one flatten invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlattenReport {
    /// Root path that was flattened (canonicalized).
    pub root_path: PathBuf,

    /// Where the document was written.
    pub output_path: PathBuf,

    /// Bytes of the rendered document.
    pub document_len: u64,

    /// When this run was performed.
    pub flattened_at: SystemTime,

    /// Duration of the run.
    pub duration: Duration,

    /// Configuration used.
    pub config: FlattenConfig,

    /// Summary statistics.
    pub stats: FlattenStats,

    /// Per-file skips encountered during the run.
    pub warnings: Vec<FlattenWarning>,
}

impl FlattenReport {
    /// Create a new report.
    pub fn new(
        root_path: PathBuf,
        output_path: PathBuf,
        document_len: u64,
        config: FlattenConfig,
        stats: FlattenStats,
        duration: Duration,
        warnings: Vec<FlattenWarning>,
    ) -> Self {
        Self {
            root_path,
            output_path,
            document_len,
            flattened_at: SystemTime::now(),
            duration,
            config,
            stats,
            warnings,
        }
    }

    /// Number of entries in the written document.
    pub fn entry_count(&self) -> u64 {
        self.stats.files_flattened
    }

    /// Check if any file was skipped during the run.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = FlattenStats::default();
        assert_eq!(stats.files_flattened, 0);
        assert_eq!(stats.bytes_read, 0);
        assert_eq!(stats.max_depth, 0);
    }

    #[test]
    fn test_stats_record_file() {
        let mut stats = FlattenStats::new();
        stats.record_file(1024, 2);
        stats.record_file(10, 1);

        assert_eq!(stats.files_flattened, 2);
        assert_eq!(stats.bytes_read, 1034);
        assert_eq!(stats.max_depth, 2);
    }

    #[test]
    fn test_stats_record_skip_and_excluded() {
        let mut stats = FlattenStats::new();
        stats.record_skip();
        stats.record_excluded();
        stats.record_excluded();

        assert_eq!(stats.files_skipped, 1);
        assert_eq!(stats.files_excluded, 2);
        assert_eq!(stats.files_flattened, 0);
    }
}
