//! State passed through pipeline phases.

use specials_core::Entry;
use specials_source::{BindingMap, SourceFile, Unresolved};

use super::diagnostic::{Diagnostic, Severity};
use crate::table::{SpecialsTable, TableStyle};

/// How the action source should be scanned.
#[derive(Debug, Clone)]
pub enum ScanMode {
    /// Strict comment blocks that carry their own code.
    CommentBlock,
    /// `implements` comments resolved through the given binding source.
    CrossReference { bindings: SourceFile },
}

impl ScanMode {
    /// Table shape that goes with this mode.
    pub fn style(&self) -> TableStyle {
        match self {
            ScanMode::CommentBlock => TableStyle::Sorted,
            ScanMode::CrossReference { .. } => TableStyle::Streamed,
        }
    }
}

/// Inputs of one pipeline run.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// The action source to scan.
    pub actions: SourceFile,
    pub mode: ScanMode,
    /// Treat a table without entries as an error.
    pub deny_empty: bool,
}

impl ScanRequest {
    pub fn comment_block(actions: SourceFile) -> Self {
        Self {
            actions,
            mode: ScanMode::CommentBlock,
            deny_empty: false,
        }
    }

    pub fn cross_reference(bindings: SourceFile, actions: SourceFile) -> Self {
        Self {
            actions,
            mode: ScanMode::CrossReference { bindings },
            deny_empty: false,
        }
    }

    pub fn deny_empty(mut self, deny: bool) -> Self {
        self.deny_empty = deny;
        self
    }
}

/// Context passed through all pipeline phases.
#[derive(Debug)]
pub struct CompilationContext {
    /// The request being processed.
    pub request: ScanRequest,
    /// The binding table (populated by BindingsPhase in cross-reference mode).
    pub bindings: Option<BindingMap>,
    /// Entries found so far, in emission order once OrderPhase has run.
    pub entries: Vec<Entry>,
    /// References skipped for lack of a binding (populated by ScanPhase).
    pub unresolved: Vec<Unresolved>,
    /// Diagnostics collected during the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new context from a request.
    pub fn new(request: ScanRequest) -> Self {
        Self {
            request,
            bindings: None,
            entries: Vec::new(),
            unresolved: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn style(&self) -> TableStyle {
        self.request.mode.style()
    }

    /// The table as it would be emitted.
    pub fn table(&self) -> SpecialsTable<'_> {
        SpecialsTable::new(self.style(), &self.entries)
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Diagnostics of the given severity.
    pub fn diagnostics_of(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.severity == severity)
    }

    /// Add a diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_context() -> CompilationContext {
        CompilationContext::new(ScanRequest::comment_block(SourceFile::from_text(
            "ev_actions.cpp",
            "",
        )))
    }

    #[test]
    fn test_new_context() {
        let ctx = make_context();
        assert!(ctx.bindings.is_none());
        assert!(ctx.entries.is_empty());
        assert!(!ctx.has_errors());
        assert!(!ctx.has_warnings());
        assert_eq!(ctx.style(), TableStyle::Sorted);
    }

    #[test]
    fn test_diagnostic_helpers() {
        let mut ctx = make_context();
        ctx.add_diagnostic(Diagnostic::error("test", "error 1"));
        ctx.add_diagnostic(Diagnostic::warning("test", "warning 1"));
        ctx.add_diagnostic(Diagnostic::warning("test", "warning 2"));

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.diagnostics_of(Severity::Warning).count(), 2);
        assert_eq!(ctx.diagnostics_of(Severity::Info).count(), 0);
    }

    #[test]
    fn test_cross_reference_is_streamed() {
        let request = ScanRequest::cross_reference(
            SourceFile::from_text("ev_bindings.cpp", ""),
            SourceFile::from_text("ev_actions.cpp", ""),
        );
        assert_eq!(request.mode.style(), TableStyle::Streamed);
    }
}
