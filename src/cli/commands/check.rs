//! The `check` command: scan, resolve, report.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::inspect::MetadataInspector;
use crate::report::{Reporter, ReportSummary};
use crate::resolve::{resolve_all, Resolution};
use crate::scan::Scanner;

use super::{Command, CommandResult};

/// Exit code for `--strict` runs with unresolved dependencies.
const EXIT_UNRESOLVED: i32 = 2;

/// Checks symbol-version dependencies across the scanned module set.
pub struct CheckCommand {
    args: CheckArgs,
    verbose: bool,
}

/// JSON document emitted by `check --json`.
#[derive(Debug, Serialize)]
struct CheckOutput<'a> {
    modules: usize,
    skipped: usize,
    summary: ReportSummary,
    resolutions: &'a [Resolution],
}

impl CheckCommand {
    /// Create a check command.
    pub fn new(args: CheckArgs, verbose: bool) -> Self {
        Self { args, verbose }
    }
}

impl Command for CheckCommand {
    fn execute(&self) -> crate::error::Result<CommandResult> {
        let scanner = Scanner::new(MetadataInspector::new());
        let scan = scanner.scan(&self.args.paths)?;

        tracing::info!(
            modules = scan.scanned,
            skipped = scan.skipped,
            "module set assembled"
        );

        let resolutions = resolve_all(&scan.set);

        let summary = if self.args.json {
            let summary = ReportSummary::tally(&resolutions);
            let output = CheckOutput {
                modules: scan.scanned,
                skipped: scan.skipped,
                summary,
                resolutions: &resolutions,
            };
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &output)
                .map_err(|e| anyhow::anyhow!("failed to serialize results: {}", e))?;
            writeln!(stdout)?;
            summary
        } else {
            let mut out = io::stdout().lock();
            let mut err = io::stderr().lock();
            Reporter::new(&mut out, &mut err, self.verbose).report(&resolutions)?
        };

        tracing::debug!(
            preferred = summary.preferred,
            elsewhere = summary.elsewhere,
            unresolved = summary.unresolved,
            "resolution complete"
        );

        if self.args.strict && summary.has_unresolved() {
            return Ok(CommandResult::failure(EXIT_UNRESOLVED));
        }
        Ok(CommandResult::success())
    }
}
