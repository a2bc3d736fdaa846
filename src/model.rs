//! Data model for a scanned module set.
//!
//! A scan produces a [`ModuleSet`]: two tables keyed by module base file
//! name, one mapping each module to the symbols it provides and one mapping
//! each module to the symbol version ranges it depends on. Both tables are
//! built once by the scanner and read-only afterwards; the resolver never
//! mutates them.

use std::collections::BTreeMap;

use serde::Serialize;

/// File-name suffix identifying a loadable module artifact.
pub const MODULE_SUFFIX: &str = ".ko";

/// Base file names identifying a kernel image.
pub const KERNEL_IMAGE_NAMES: &[&str] = &["kernel", "kernel.old"];

/// Module-name prefix placing a module in the kernel set.
pub const KERNEL_PREFIX: &str = "kernel";

/// Acceptable version window for a depended symbol.
///
/// The preferred version labels the intended resolution target but is not
/// part of the satisfiability test; only `min` and `max` bound the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionRange {
    pub min: u32,
    pub preferred: u32,
    pub max: u32,
}

impl VersionRange {
    /// Create a range from its `(min, preferred, max)` triple.
    pub fn new(min: u32, preferred: u32, max: u32) -> Self {
        Self {
            min,
            preferred,
            max,
        }
    }

    /// Exact-version range, as emitted for versionless dependencies.
    pub fn exact(version: u32) -> Self {
        Self::new(version, version, version)
    }

    /// Whether a provided version falls inside the window (inclusive).
    pub fn contains(&self, version: u32) -> bool {
        version >= self.min && version <= self.max
    }
}

/// Symbols a module exports, by name, with their versions.
pub type ProvidesEntry = BTreeMap<String, u32>;

/// Symbols a module requires, by name, with their acceptable ranges.
pub type DependsEntry = BTreeMap<String, VersionRange>;

/// The completed global tables for one scan pass.
///
/// Keys are module base file names. Duplicate base names under different
/// roots collapse to one slot, last write wins.
#[derive(Debug, Default)]
pub struct ModuleSet {
    provisions: BTreeMap<String, ProvidesEntry>,
    dependencies: BTreeMap<String, DependsEntry>,
}

impl ModuleSet {
    /// Create an empty module set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one module's tables, replacing any previous module of the
    /// same name.
    pub fn insert(&mut self, name: impl Into<String>, provides: ProvidesEntry, depends: DependsEntry) {
        let name = name.into();
        self.provisions.insert(name.clone(), provides);
        self.dependencies.insert(name, depends);
    }

    /// The provision entry for a module, if it was scanned.
    pub fn provides(&self, module: &str) -> Option<&ProvidesEntry> {
        self.provisions.get(module)
    }

    /// Iterate the provision table in stable (sorted-name) order.
    pub fn provisions(&self) -> impl Iterator<Item = (&str, &ProvidesEntry)> {
        self.provisions.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate the dependency table in stable (sorted-name) order.
    pub fn dependencies(&self) -> impl Iterator<Item = (&str, &DependsEntry)> {
        self.dependencies.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Module names in the kernel set, in table order.
    ///
    /// The kernel set is every scanned module whose name starts with the
    /// kernel prefix, so `kernel` and `kernel.old` both qualify.
    pub fn kernel_set(&self) -> Vec<String> {
        self.provisions
            .keys()
            .filter(|name| name.starts_with(KERNEL_PREFIX))
            .cloned()
            .collect()
    }

    /// Number of scanned modules.
    pub fn len(&self) -> usize {
        self.provisions.len()
    }

    /// Whether the scan found no modules at all.
    pub fn is_empty(&self) -> bool {
        self.provisions.is_empty()
    }
}
