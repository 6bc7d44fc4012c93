//! Table command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from table generation.
#[derive(Debug)]
pub struct TableReport {
    /// Action source that was scanned.
    pub actions_path: PathBuf,
    /// Binding rows to print before the table.
    pub echo: Vec<String>,
    /// The rendered table.
    pub table: String,
    /// Number of entries in the table.
    pub entry_count: usize,
    /// Error messages from the pipeline.
    pub errors: Vec<String>,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
}

impl TableReport {
    /// Whether the table can be emitted (no errors).
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for TableReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for line in &self.echo {
            out.preformatted(line);
        }

        out.raw(&self.table);
    }
}
