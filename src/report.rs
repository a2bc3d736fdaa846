//! Diagnostic output for resolution outcomes.
//!
//! One line per outcome, in the tool's literal formats:
//!
//! ```text
//! net.ko depend core found in core.ko            (verbose only, stdout)
//! a.ko depend widget found in k.ko instead       (warning, stderr)
//! a.ko depend foo 10 10 10 not found             (error, stderr)
//! ```
//!
//! Informational lines go to the out stream and are gated on verbose mode;
//! warnings and errors always go to the err stream. Nothing here aborts
//! the run; the reporter's job is exhaustive output plus a tally.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::resolve::{Outcome, Resolution};

/// Counts of each outcome kind across one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub preferred: usize,
    pub elsewhere: usize,
    pub unresolved: usize,
}

impl ReportSummary {
    /// Tally outcomes without emitting anything.
    pub fn tally(resolutions: &[Resolution]) -> Self {
        let mut summary = Self::default();
        for resolution in resolutions {
            match resolution.outcome {
                Outcome::Preferred { .. } => summary.preferred += 1,
                Outcome::Elsewhere { .. } => summary.elsewhere += 1,
                Outcome::Unresolved => summary.unresolved += 1,
            }
        }
        summary
    }

    /// Whether any dependency went unsatisfied.
    pub fn has_unresolved(&self) -> bool {
        self.unresolved > 0
    }
}

/// Writes outcome diagnostics to a pair of text streams.
pub struct Reporter<'a> {
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    verbose: bool,
}

impl<'a> Reporter<'a> {
    /// Create a reporter over the given streams.
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write, verbose: bool) -> Self {
        Self { out, err, verbose }
    }

    /// Emit every resolution and return the tally.
    pub fn report(&mut self, resolutions: &[Resolution]) -> Result<ReportSummary> {
        let mut summary = ReportSummary::default();
        for resolution in resolutions {
            self.emit(resolution, &mut summary)?;
        }
        Ok(summary)
    }

    fn emit(&mut self, resolution: &Resolution, summary: &mut ReportSummary) -> Result<()> {
        match &resolution.outcome {
            Outcome::Preferred { resolver } => {
                summary.preferred += 1;
                if self.verbose {
                    writeln!(
                        self.out,
                        "{} depend {} found in {}",
                        resolution.module, resolution.symbol, resolver
                    )?;
                }
            }
            Outcome::Elsewhere { resolvers } => {
                summary.elsewhere += 1;
                for resolver in resolvers {
                    writeln!(
                        self.err,
                        "{} depend {} found in {} instead",
                        resolution.module, resolution.symbol, resolver
                    )?;
                }
            }
            Outcome::Unresolved => {
                summary.unresolved += 1;
                writeln!(
                    self.err,
                    "{} depend {} {} {} {} not found",
                    resolution.module,
                    resolution.symbol,
                    resolution.range.min,
                    resolution.range.preferred,
                    resolution.range.max
                )?;
            }
        }
        Ok(())
    }
}
