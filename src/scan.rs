//! Module set scanning.
//!
//! The scanner walks the input roots, picks out module artifacts, runs the
//! inspector over each, and assembles the global [`ModuleSet`]. Both tables
//! are fully built before resolution starts; a dependency may be satisfied
//! by any module in the set, not just ones scanned earlier.
//!
//! A file that cannot be inspected is skipped with a warning and counted;
//! it never aborts the scan. Only an unreadable root is fatal.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{KmodcheckError, Result};
use crate::inspect::Inspect;
use crate::model::{ModuleSet, KERNEL_IMAGE_NAMES, MODULE_SUFFIX};

/// Result of one scan pass.
#[derive(Debug)]
pub struct ScanReport {
    /// The completed global tables.
    pub set: ModuleSet,
    /// Number of artifacts inspected successfully.
    pub scanned: usize,
    /// Number of candidate files skipped because inspection failed.
    pub skipped: usize,
}

/// Walks roots and builds the module set via an [`Inspect`] implementation.
pub struct Scanner<I: Inspect> {
    inspector: I,
}

/// Whether a file name marks a module artifact or a kernel image.
fn is_candidate(file_name: &str) -> bool {
    file_name.ends_with(MODULE_SUFFIX) || KERNEL_IMAGE_NAMES.contains(&file_name)
}

impl<I: Inspect> Scanner<I> {
    /// Create a scanner around the given inspector.
    pub fn new(inspector: I) -> Self {
        Self { inspector }
    }

    /// Scan every root, returning the completed module set.
    ///
    /// Directory roots are walked recursively and filtered to candidate
    /// file names. A root given as a plain file is inspected as-is, on the
    /// assumption that the caller named it deliberately.
    pub fn scan(&self, roots: &[PathBuf]) -> Result<ScanReport> {
        let mut report = ScanReport {
            set: ModuleSet::new(),
            scanned: 0,
            skipped: 0,
        };

        for root in roots {
            let meta = fs::metadata(root).map_err(|_| KmodcheckError::RootNotFound {
                path: root.clone(),
            })?;

            if meta.is_dir() {
                self.scan_dir(root, &mut report)?;
            } else {
                self.inspect_into(root, &mut report);
            }
        }

        tracing::debug!(
            scanned = report.scanned,
            skipped = report.skipped,
            "scan complete"
        );
        Ok(report)
    }

    /// Walk one directory. Failing to read `dir` itself is the caller's
    /// error; anything failing below it is skip-and-warn, like a failed
    /// inspection.
    fn scan_dir(&self, dir: &Path, report: &mut ScanReport) -> Result<()> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(|_| KmodcheckError::RootNotFound {
            path: dir.to_path_buf(),
        })? {
            match entry {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    tracing::warn!(path = %dir.display(), error = %e, "skipping unreadable entry");
                    report.skipped += 1;
                }
            }
        }

        // Deterministic walk order.
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let path = entry.path();
            match entry.file_type() {
                Ok(file_type) if file_type.is_dir() => {
                    if self.scan_dir(&path, report).is_err() {
                        tracing::warn!(path = %path.display(), "skipping unreadable directory");
                        report.skipped += 1;
                    }
                }
                Ok(file_type) if file_type.is_file() => {
                    let name = entry.file_name();
                    if name.to_str().is_some_and(is_candidate) {
                        self.inspect_into(&path, report);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                    report.skipped += 1;
                }
            }
        }
        Ok(())
    }

    fn inspect_into(&self, path: &Path, report: &mut ScanReport) {
        match self.inspector.inspect(path) {
            Ok(info) => {
                tracing::debug!(module = %info.name, path = %path.display(), "inspected");
                report.set.insert(info.name, info.provides, info.depends);
                report.scanned += 1;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping uninspectable file");
                report.skipped += 1;
            }
        }
    }
}
