//! Reading the engine sources that document line specials.
//!
//! - [`SourceFile`] loads an input into memory
//! - [`ScanCursor`] recognises the strict handler comment blocks
//! - [`BindingMap`] reads the Hexen binding table
//! - [`Scanner`] runs either style over an action source
//! - [`Config`] is the optional `genspecials.toml`

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod bindings;
mod config;
mod cursor;
mod error;
mod file;
mod implements;
mod scanner;

pub use bindings::{Binding, BindingMap};
pub use config::{CONFIG_FILE, Config, PathsConfig, TableConfig};
pub use cursor::{ScanCursor, scan_comment_blocks};
pub use error::{Error, Result, SourceContext};
pub use file::SourceFile;
pub use implements::ImplementsRef;
pub use scanner::{ScanOutcome, Scanner, Unresolved};
