//! The `inspect` command: dump one module's tables.

use std::io::{self, Write};

use crate::cli::args::InspectArgs;
use crate::inspect::{Inspect, MetadataInspector};

use super::{Command, CommandResult};

/// Prints a single module's provides/depends tables.
pub struct InspectCommand {
    args: InspectArgs,
}

impl InspectCommand {
    /// Create an inspect command.
    pub fn new(args: InspectArgs) -> Self {
        Self { args }
    }
}

impl Command for InspectCommand {
    fn execute(&self) -> crate::error::Result<CommandResult> {
        let info = MetadataInspector::new().inspect(&self.args.file)?;

        let mut stdout = io::stdout().lock();
        if self.args.json {
            serde_json::to_writer_pretty(&mut stdout, &info)
                .map_err(|e| anyhow::anyhow!("failed to serialize module info: {}", e))?;
            writeln!(stdout)?;
        } else {
            writeln!(stdout, "module {}", info.name)?;
            for (symbol, version) in &info.provides {
                writeln!(stdout, "provide {} {}", symbol, version)?;
            }
            for (symbol, range) in &info.depends {
                writeln!(
                    stdout,
                    "depend {} {} {} {}",
                    symbol, range.min, range.preferred, range.max
                )?;
            }
        }

        Ok(CommandResult::success())
    }
}
