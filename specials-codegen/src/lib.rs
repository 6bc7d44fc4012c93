//! Turning scanned engine sources into a specials table.
//!
//! - [`pipeline`] - phases from loaded sources to ordered entries
//! - [`table`] - rendering entries as an enumeration fragment
//! - [`builder`] - tab-indented text building

pub mod builder;
pub mod pipeline;
pub mod table;

pub use table::{SpecialsTable, TableStyle, sort_entries};
