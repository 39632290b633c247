//! JWalk-based serial tree flattener.

use std::path::Path;
use std::time::Instant;

use jwalk::{Parallelism, WalkDir};

use flattree_core::{
    DocumentEntry, FlattenConfig, FlattenError, FlattenReport, FlattenStats, FlattenWarning,
    FlattenedDocument, SkipKind,
};

/// Walks a root directory, reads every non-excluded file as text, and
/// writes the concatenated document to `source-<name>.txt`.
pub struct TreeFlattener;

impl TreeFlattener {
    /// Create a new flattener.
    pub fn new() -> Self {
        Self
    }

    /// Perform one flatten invocation.
    ///
    /// The whole document is assembled in memory and written in a single
    /// call, so no half-written output file is ever left behind.
    pub fn flatten(&self, config: &FlattenConfig) -> Result<FlattenReport, FlattenError> {
        let start = Instant::now();
        let root_path = config
            .root
            .canonicalize()
            .map_err(|e| FlattenError::io(&config.root, e))?;

        if !root_path.is_dir() {
            return Err(FlattenError::NotADirectory { path: root_path });
        }

        let mut stats = FlattenStats::new();
        let mut warnings = Vec::new();
        let mut document = FlattenedDocument::new();

        let walker = WalkDir::new(&root_path)
            .parallelism(Parallelism::Serial)
            .skip_hidden(false)
            .follow_links(false)
            .min_depth(0)
            .max_depth(config.max_depth.map(|d| d as usize).unwrap_or(usize::MAX));

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    let warning = FlattenWarning::new(&path, err.to_string(), SkipKind::ReadError);
                    emit_skip_diagnostic(&warning);
                    stats.record_skip();
                    warnings.push(warning);
                    continue;
                }
            };

            let path = entry.path();
            let depth = entry.depth() as u32;
            let file_type = entry.file_type();

            if file_type.is_dir() {
                stats.record_dir(depth);
                continue;
            }

            // Symlinked directories are listed but neither descended nor read.
            if file_type.is_symlink() && path.is_dir() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().to_string();
            if config.is_excluded(&file_name) {
                stats.record_excluded();
                continue;
            }

            // Reading through a file symlink follows it; a dangling target
            // becomes a per-file skip, same as any other read failure.
            let bytes = match std::fs::read(&path) {
                Ok(b) => b,
                Err(err) => {
                    let warning = FlattenWarning::read_failure(&path, &err);
                    emit_skip_diagnostic(&warning);
                    stats.record_skip();
                    warnings.push(warning);
                    continue;
                }
            };

            let content = String::from_utf8_lossy(&bytes).into_owned();
            let label = relative_label(&path, &root_path);

            stats.record_file(bytes.len() as u64, depth);
            document.push(DocumentEntry::new(label, content));
        }

        if config.sort_entries {
            document.sort_by_label();
        }

        let rendered = document.render();
        let output_path = config.output_path();
        std::fs::write(&output_path, &rendered).map_err(|e| FlattenError::WriteOutput {
            path: output_path.clone(),
            source: e,
        })?;

        Ok(FlattenReport::new(
            root_path,
            output_path,
            rendered.len() as u64,
            config.clone(),
            stats,
            start.elapsed(),
            warnings,
        ))
    }
}

impl Default for TreeFlattener {
    fn default() -> Self {
        Self::new()
    }
}

/// Path relative to the root, rendered with platform separators.
fn relative_label(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn emit_skip_diagnostic(warning: &FlattenWarning) {
    tracing::warn!(
        target: "flatten",
        "skipping {}: likely not decodable or inaccessible",
        warning.file_name()
    );
}
