//! Text building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building tab-indented lines

mod code_builder;

pub use code_builder::CodeBuilder;
