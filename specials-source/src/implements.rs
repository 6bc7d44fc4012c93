//! `// Implements Name(args)` references in loosely formatted comments.

use std::sync::LazyLock;

use regex::Regex;
use specials_core::{count_segments, leading_word};

const COMMENT: &str = "//";

static IMPLEMENTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)implements").unwrap());
static ARG_LIST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^)]*)\)").unwrap());

/// A special named by an `implements` comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementsRef {
    pub name: String,
    pub arity: usize,
}

impl ImplementsRef {
    /// Parse a comment line of the form `// ... implements Name(a, b)`.
    ///
    /// The match on `implements` ignores case. The name is the first
    /// identifier after it; the arity comes from the first parenthesised
    /// group on the line, where `()` counts as zero arguments. Lines with
    /// no group are rejected.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with(COMMENT) {
            return None;
        }
        let keyword = IMPLEMENTS.find(line)?;
        let name = leading_word(&line[keyword.end()..])?;
        let args = ARG_LIST.captures(line)?.get(1)?.as_str();

        Some(Self {
            name: name.to_string(),
            arity: arity_of(args),
        })
    }
}

fn arity_of(args: &str) -> usize {
    if args.trim().is_empty() {
        0
    } else {
        count_segments(args)
    }
}
