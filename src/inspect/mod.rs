//! Module inspection boundary.
//!
//! Inspection is the only point where the checker touches module artifacts
//! on disk. It is behind the [`Inspect`] trait so the resolver can be
//! driven by synthetic tables in tests, and so a real binary-format
//! inspector can be plugged in without touching the pipeline.
//!
//! The shipped implementation is [`MetadataInspector`], which reads the
//! line-based metadata the build system exports next to each artifact.

pub mod metadata;

use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::model::{DependsEntry, ProvidesEntry};

pub use metadata::MetadataInspector;

/// Everything the checker needs to know about one module artifact.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleInfo {
    /// Module name, the base file name of the inspected artifact.
    pub name: String,
    /// Symbols the module exports, with versions.
    pub provides: ProvidesEntry,
    /// Symbols the module requires, with acceptable version ranges.
    pub depends: DependsEntry,
}

/// Extracts provides/depends tables from a module artifact.
pub trait Inspect {
    /// Inspect the artifact at `path`.
    ///
    /// Returns an error if the artifact cannot be read or its metadata is
    /// malformed. A scan treats that as a per-file failure and continues.
    fn inspect(&self, path: &Path) -> Result<ModuleInfo>;
}
