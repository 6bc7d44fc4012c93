//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an Output target.

mod check;
mod output;
mod table;

pub use check::CheckReport;
pub use output::{Output, Report, TerminalOutput};
pub use table::TableReport;
