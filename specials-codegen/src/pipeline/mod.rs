//! Scan pipeline.
//!
//! [`Pipeline`] runs the phases that take loaded sources to an ordered list
//! of entries:
//!
//! - Explicit phase boundaries (bindings → scan → validate → order)
//! - Unified diagnostics collection
//! - Shared state via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use specials_codegen::pipeline::{Pipeline, ScanRequest, Severity};
//!
//! let ctx = Pipeline::new().run(ScanRequest::comment_block(actions))?;
//!
//! for diag in ctx.diagnostics_of(Severity::Warning) {
//!     eprintln!("warning: {}", diag.message);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::{CompilationContext, ScanMode, ScanRequest};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
