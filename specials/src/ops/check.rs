//! Check operation - scan without emitting.

use eyre::{Context, Result};
use specials_codegen::pipeline::{Diagnostic, Pipeline, ScanMode, ScanRequest, Severity};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline and collects what the table would contain along with
/// every diagnostic.
pub fn check(request: ScanRequest) -> Result<CheckReport> {
    let actions_path = request.actions.path().to_path_buf();
    let bindings_path = match &request.mode {
        ScanMode::CrossReference { bindings } => Some(bindings.path().to_path_buf()),
        ScanMode::CommentBlock => None,
    };

    let ctx = Pipeline::new().run(request).wrap_err("Check failed")?;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = format_diagnostic(diag);
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Ok(CheckReport {
        style: ctx.style(),
        actions_path,
        bindings_path,
        binding_count: ctx.bindings.as_ref().map(|b| b.len()),
        entries: ctx.entries,
        errors,
        warnings,
        infos,
    })
}

fn format_diagnostic(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    }
}
