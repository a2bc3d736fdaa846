//! Line-based module metadata parsing.
//!
//! Each module artifact carries a metadata table of the form:
//!
//! ```text
//! # net.ko exported metadata
//! provide netcore 3
//! depend core 1 2 5
//! ```
//!
//! `provide <symbol> <version>` declares an exported symbol; `depend
//! <symbol> <min> <preferred> <max>` declares a required symbol with its
//! acceptable version window. Blank lines and `#` comments are ignored.
//! A module may list the same depended symbol more than once; the last
//! occurrence wins.

use std::fs;
use std::path::Path;

use crate::error::{KmodcheckError, Result};
use crate::model::{DependsEntry, ProvidesEntry, VersionRange};

use super::{Inspect, ModuleInfo};

/// Inspector for the exported line-based metadata format.
#[derive(Debug, Default)]
pub struct MetadataInspector;

impl MetadataInspector {
    /// Create a metadata inspector.
    pub fn new() -> Self {
        Self
    }

    fn parse_version(path: &Path, line_no: usize, field: &str) -> Result<u32> {
        field
            .parse::<u32>()
            .map_err(|_| KmodcheckError::MetadataParse {
                path: path.to_path_buf(),
                line: line_no,
                message: format!("invalid version number '{}'", field),
            })
    }
}

impl Inspect for MetadataInspector {
    fn inspect(&self, path: &Path) -> Result<ModuleInfo> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| KmodcheckError::InspectionFailed {
                path: path.to_path_buf(),
                message: "path has no usable file name".to_string(),
            })?
            .to_string();

        let contents = fs::read_to_string(path).map_err(|e| KmodcheckError::InspectionFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut provides = ProvidesEntry::new();
        let mut depends = DependsEntry::new();

        for (idx, raw) in contents.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                ["provide", symbol, version] => {
                    let version = Self::parse_version(path, line_no, version)?;
                    provides.insert((*symbol).to_string(), version);
                }
                ["depend", symbol, min, preferred, max] => {
                    let min = Self::parse_version(path, line_no, min)?;
                    let preferred = Self::parse_version(path, line_no, preferred)?;
                    let max = Self::parse_version(path, line_no, max)?;
                    depends.insert((*symbol).to_string(), VersionRange::new(min, preferred, max));
                }
                ["provide", ..] => {
                    return Err(KmodcheckError::MetadataParse {
                        path: path.to_path_buf(),
                        line: line_no,
                        message: "provide takes exactly 2 fields: <symbol> <version>".to_string(),
                    });
                }
                ["depend", ..] => {
                    return Err(KmodcheckError::MetadataParse {
                        path: path.to_path_buf(),
                        line: line_no,
                        message: "depend takes exactly 4 fields: <symbol> <min> <preferred> <max>"
                            .to_string(),
                    });
                }
                [directive, ..] => {
                    return Err(KmodcheckError::MetadataParse {
                        path: path.to_path_buf(),
                        line: line_no,
                        message: format!("unknown directive '{}'", directive),
                    });
                }
                [] => unreachable!("blank lines are filtered above"),
            }
        }

        Ok(ModuleInfo {
            name,
            provides,
            depends,
        })
    }
}
