//! Generate operation - scan sources and render the table.

use eyre::{Context, Result};
use specials_codegen::pipeline::{Pipeline, ScanRequest, Severity};

use crate::reports::TableReport;

/// Options for the generate operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Print binding rows ahead of a cross-referenced table.
    pub echo_bindings: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the request and renders the resulting table.
pub fn generate(request: ScanRequest, opts: GenerateOptions) -> Result<TableReport> {
    let actions_path = request.actions.path().to_path_buf();
    let ctx = Pipeline::new().run(request).wrap_err("Pipeline failed")?;

    for diag in ctx.diagnostics_of(Severity::Info) {
        log::info!("{}", diag);
    }

    let messages = |severity| {
        ctx.diagnostics_of(severity)
            .map(|d| match &d.location {
                Some(loc) => format!("{} (at {})", d.message, loc),
                None => d.message.clone(),
            })
            .collect::<Vec<_>>()
    };

    let echo: Vec<String> = match (&ctx.bindings, opts.echo_bindings) {
        (Some(bindings), true) => bindings
            .declarations()
            .iter()
            .map(|b| b.echo_line())
            .collect(),
        _ => Vec::new(),
    };

    let table = ctx.table();
    Ok(TableReport {
        actions_path,
        echo,
        table: table.render(),
        entry_count: table.len(),
        errors: messages(Severity::Error),
        warnings: messages(Severity::Warning),
    })
}
