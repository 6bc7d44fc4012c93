//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the scan pipeline.
///
/// Phases are executed in order by the pipeline. Each phase reads and
/// updates the context, adding bindings, entries or diagnostics.
///
/// Built-in phases:
/// - `BindingsPhase` - reads the binding table for cross-referenced scans
/// - `ScanPhase` - collects entries from the action source
/// - `ValidatePhase` - reports empty tables, unresolved names, duplicates
/// - `OrderPhase` - sorts entries for sorted tables
pub trait Phase {
    /// The name of this phase (used in diagnostics).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
