//! Scan phase - collects entries from the action source.

use eyre::Result;
use specials_source::Scanner;

use crate::pipeline::{CompilationContext, Phase, ScanMode};

/// Phase that runs the configured scanner over the action source.
///
/// In cross-reference mode this must run after `BindingsPhase`.
pub struct ScanPhase;

impl Phase for ScanPhase {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn description(&self) -> &'static str {
        "Collect specials from the action source"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let scanner = match &ctx.request.mode {
            ScanMode::CommentBlock => Scanner::CommentBlock,
            ScanMode::CrossReference { .. } => {
                let bindings = ctx.bindings.as_ref().ok_or_else(|| {
                    eyre::eyre!("bindings not set - ScanPhase must run after BindingsPhase")
                })?;
                Scanner::CrossReference(bindings)
            }
        };

        let outcome = scanner.scan(&ctx.request.actions);
        ctx.entries = outcome.entries;
        ctx.unresolved = outcome.unresolved;
        Ok(())
    }
}
