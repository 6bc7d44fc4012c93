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
pub struct TableCommand {
    /// Action source to scan (defaults to paths.actions from the config)
    #[arg(short, long)]
    pub actions: Option<PathBuf>,

    /// Fail instead of printing an empty table
    #[arg(long)]
    pub deny_empty: bool,
}

impl TableCommand {
    /// Run the table command
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config();
        let actions = global.open(self.actions.as_deref().unwrap_or(&config.paths.actions));

        let request = ScanRequest::comment_block(actions)
            .deny_empty(self.deny_empty || config.table.deny_empty);
        let report = ops::generate(request, GenerateOptions::default())?;

        if !report.is_ok() {
            exit_with(Error::no_entries(report.actions_path));
        }

        log::info!("emitting {} specials", report.entry_count);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
