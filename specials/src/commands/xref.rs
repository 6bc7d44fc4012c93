use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use specials_codegen::pipeline::ScanRequest;
use specials_source::Error;

use super::{GlobalArgs, exit_with};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct XrefCommand {
    /// Source holding the Hexen binding table (defaults to paths.bindings)
    #[arg(short, long)]
    pub bindings: Option<PathBuf>,

    /// Action source to scan (defaults to paths.actions from the config)
    #[arg(short, long)]
    pub actions: Option<PathBuf>,

    /// Don't print the binding rows ahead of the table
    #[arg(long)]
    pub no_echo: bool,

    /// Fail instead of printing an empty table
    #[arg(long)]
    pub deny_empty: bool,
}

impl XrefCommand {
    /// Run the xref command
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config();
        let bindings = global.open(self.bindings.as_deref().unwrap_or(&config.paths.bindings));
        let actions = global.open(self.actions.as_deref().unwrap_or(&config.paths.actions));

        let request = ScanRequest::cross_reference(bindings, actions)
            .deny_empty(self.deny_empty || config.table.deny_empty);
        let opts = GenerateOptions {
            echo_bindings: config.table.echo_bindings && !self.no_echo,
        };
        let report = ops::generate(request, opts)?;

        if !report.is_ok() {
            exit_with(Error::no_entries(report.actions_path));
        }

        log::info!("emitting {} specials", report.entry_count);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
