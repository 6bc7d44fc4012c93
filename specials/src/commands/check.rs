use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::Result;
use specials_codegen::pipeline::ScanRequest;

use super::GlobalArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

/// Which scanner to check with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Strict handler comment blocks
    CommentBlock,
    /// `implements` comments resolved through the binding table
    CrossReference,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Scanner to run
    #[arg(short, long, value_enum, default_value_t = Mode::CommentBlock)]
    pub mode: Mode,

    /// Source holding the Hexen binding table (defaults to paths.bindings)
    #[arg(short, long)]
    pub bindings: Option<PathBuf>,

    /// Action source to scan (defaults to paths.actions from the config)
    #[arg(short, long)]
    pub actions: Option<PathBuf>,

    /// Treat an empty table as an error
    #[arg(long)]
    pub deny_empty: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config();
        let actions = global.open(self.actions.as_deref().unwrap_or(&config.paths.actions));

        let request = match self.mode {
            Mode::CommentBlock => ScanRequest::comment_block(actions),
            Mode::CrossReference => {
                let bindings =
                    global.open(self.bindings.as_deref().unwrap_or(&config.paths.bindings));
                ScanRequest::cross_reference(bindings, actions)
            }
        }
        .deny_empty(self.deny_empty || config.table.deny_empty);

        let report = ops::check(request)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
