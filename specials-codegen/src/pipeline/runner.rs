//! Pipeline orchestrator.

use eyre::Result;

use super::{
    CompilationContext, Phase, ScanRequest,
    phases::{BindingsPhase, OrderPhase, ScanPhase, ValidatePhase},
};

/// The scan pipeline orchestrator.
///
/// Runs the built-in phases (bindings, scan, validate, order) followed by
/// any extra phases, in order, over one [`CompilationContext`].
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new().run(ScanRequest::comment_block(actions))?;
/// print!("{}", ctx.table().render());
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with the default built-in phases.
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on a request.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, request: ScanRequest) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(request);

        // Built-in phases in execution order
        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(BindingsPhase),
            Box::new(ScanPhase),
            Box::new(ValidatePhase),
            Box::new(OrderPhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            log::debug!("phase {}: {}", phase.name(), phase.description());
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
