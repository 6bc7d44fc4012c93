//! Built-in pipeline phases.
//!
//! - [`BindingsPhase`] - reads the binding table (cross-reference mode only)
//! - [`ScanPhase`] - collects entries from the action source
//! - [`ValidatePhase`] - reports empty tables, unresolved names and duplicates
//! - [`OrderPhase`] - sorts entries when the table style asks for it

mod bindings;
mod order;
mod scan;
mod validate;

pub use bindings::BindingsPhase;
pub use order::OrderPhase;
pub use scan::ScanPhase;
pub use validate::ValidatePhase;
