//! Validate phase - turns scan results into diagnostics.

use eyre::Result;

use crate::pipeline::{CompilationContext, Diagnostic, Phase, ScanMode};

/// Phase that reports what the scan skipped or failed to find.
///
/// - no entries: warning, or error when the request denies empty tables
/// - `implements` names without a binding: info, one per reference
/// - names bound more than once: warning
pub struct ValidatePhase;

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Report empty tables, unbound names and duplicate bindings"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let phase = self.name();
        let actions = ctx.request.actions.path().display().to_string();
        let mut diagnostics = Vec::new();

        if let ScanMode::CrossReference { bindings } = &ctx.request.mode {
            let bindings_path = bindings.path().display().to_string();
            for dup in ctx.bindings.iter().flat_map(|map| map.duplicates()) {
                diagnostics.push(
                    Diagnostic::warning(
                        phase,
                        format!("'{}' is bound more than once, using code {}", dup.name, dup.code),
                    )
                    .at(format!("{}:{}", bindings_path, dup.line)),
                );
            }
        }

        for unresolved in &ctx.unresolved {
            diagnostics.push(
                Diagnostic::info(phase, format!("'{}' has no binding", unresolved.name))
                    .at(format!("{}:{}", actions, unresolved.line)),
            );
        }

        if ctx.entries.is_empty() {
            let message = format!("no specials found in {}", actions);
            diagnostics.push(if ctx.request.deny_empty {
                Diagnostic::error(phase, message)
            } else {
                Diagnostic::warning(phase, message)
            });
        }

        ctx.diagnostics.extend(diagnostics);
        Ok(())
    }
}
