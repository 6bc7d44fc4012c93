mod check;
mod completions;
mod table;
mod xref;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use specials_source::{CONFIG_FILE, Config, SourceFile};
use table::TableCommand;
use xref::XrefCommand;

use crate::logging;

/// Extension trait for exiting on source errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for specials_source::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(e),
        }
    }
}

/// Print a source error through miette and exit with status 1.
pub(crate) fn exit_with(error: Box<specials_source::Error>) -> ! {
    eprintln!("{:?}", miette::Report::new(*error));
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "genspecials")]
#[command(version)]
#[command(about = "Generate the ACS line-special table from engine sources")]
pub(crate) struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logging::init(self.global.verbose);

        match &self.command {
            Commands::Table(cmd) => cmd.run(&self.global),
            Commands::Xref(cmd) => cmd.run(&self.global),
            Commands::Check(cmd) => cmd.run(&self.global),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sorted specials table from handler comment blocks
    Table(TableCommand),

    /// Print specials resolved through the Hexen binding table
    Xref(XrefCommand),

    /// Scan without printing the table and report what was found
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Engine checkout root; relative input paths are resolved against it
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Path to the config file (defaults to <root>/genspecials.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Load the config file, or defaults when none exists.
    pub fn load_config(&self) -> Config {
        let path = self
            .config
            .clone()
            .unwrap_or_else(|| self.root.join(CONFIG_FILE));
        Config::open_or_default(path).unwrap_or_exit()
    }

    /// Resolve an input path against the root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Resolve and read an input, exiting on failure.
    pub fn open(&self, path: &Path) -> SourceFile {
        SourceFile::open(self.resolve(path)).unwrap_or_exit()
    }
}
