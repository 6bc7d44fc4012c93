//! Check command report data structures.

use std::path::PathBuf;

use serde::Serialize;
use specials_codegen::TableStyle;
use specials_core::Entry;

use super::output::{Output, Report};

/// Report data from a scan without emission.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Table style the scan would emit.
    pub style: TableStyle,
    /// Action source that was scanned.
    pub actions_path: PathBuf,
    /// Binding source, for cross-referenced scans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindings_path: Option<PathBuf>,
    /// Number of distinct bound names, for cross-referenced scans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding_count: Option<usize>,
    /// Entries in emission order.
    pub entries: Vec<Entry>,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        // Print errors
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        // Print warnings
        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        // Print infos
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.infos.is_empty() {
            out.newline();
        }

        if let (Some(path), Some(count)) = (&self.bindings_path, self.binding_count) {
            out.key_value(
                &path.display().to_string(),
                &format!("{} binding{}", count, plural(count)),
            );
        }

        let count = self.entries.len();
        out.key_value(
            &self.actions_path.display().to_string(),
            &format!("{} special{}", count, plural(count)),
        );
        for entry in &self.entries {
            out.list_item(&entry.to_string());
        }

        if self.is_valid() {
            out.newline();
            out.preformatted(&format!("✓ {} is usable", self.actions_path.display()));
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
