//! kmodcheck - Cross-module symbol-version dependency checker.
//!
//! kmodcheck scans a set of compiled kernel modules (and kernel images),
//! reads each module's provided and depended symbol-version tables, and
//! verifies that every dependency is satisfiable by some provider in the
//! set under a fixed search-order policy: the module itself, then the
//! kernel set, then the module named after the symbol. Dependencies that
//! are satisfied only outside that order, or not at all, are reported.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`inspect`] - Module inspection boundary and metadata parsing
//! - [`model`] - Version ranges and the scanned module set
//! - [`report`] - Diagnostic output for resolution outcomes
//! - [`resolve`] - The ordered-candidate dependency resolver
//! - [`scan`] - Filesystem walking and module set assembly
//!
//! # Example
//!
//! ```
//! use kmodcheck::model::{ModuleSet, VersionRange};
//! use kmodcheck::resolve::{resolve_all, Outcome};
//!
//! let mut set = ModuleSet::new();
//! set.insert(
//!     "drv.ko",
//!     Default::default(),
//!     [("abi".to_string(), VersionRange::new(5, 7, 9))].into(),
//! );
//! set.insert("kernel", [("abi".to_string(), 7)].into(), Default::default());
//!
//! let resolutions = resolve_all(&set);
//! assert!(matches!(
//!     resolutions[0].outcome,
//!     Outcome::Preferred { ref resolver } if resolver == "kernel"
//! ));
//! ```

pub mod cli;
pub mod error;
pub mod inspect;
pub mod model;
pub mod report;
pub mod resolve;
pub mod scan;

pub use error::{KmodcheckError, Result};
