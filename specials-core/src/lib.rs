//! Core types for the line-special table generator.
//!
//! This crate provides the data model shared by the scanners and the
//! table emitter.

mod entry;
mod utils;

pub use entry::{CODE_WIDTH, Entry, SpecialCode};
pub use utils::{count_segments, is_word_char, leading_word};
