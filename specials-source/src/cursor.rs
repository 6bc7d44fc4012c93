//! State machine for documented special handlers.
//!
//! A handler is recognised by a six-line comment block:
//!
//! ```text
//! //
//! // A_SomeAction
//! //
//! // Implements Special_Foo(arg1, arg2, arg3)
//! // * ExtraData: 300
//! // * Hexen:     7
//! ```
//!
//! The code is taken from the line after the `ExtraData` marker.
//!
//! Every line drives exactly one [`ScanCursor::step`]. A line that does not
//! fit the expected shape drops the cursor back to [`ScanCursor::Start`]
//! without being looked at again.

use specials_core::{Entry, count_segments};

const DIVIDER: &str = "//";
const IMPLEMENTS: &str = "Implements";
const EXTRA_DATA: &str = "ExtraData";
const EXTRA_DATA_COLUMN: usize = 5;
const EXTRA_DATA_MIN_LEN: usize = 15;

/// Where the scanner is inside a comment block.
///
/// Each variant is named after the line it expects next and carries what
/// has been captured so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanCursor {
    /// Outside any block, waiting for a bare `//`.
    #[default]
    Start,
    /// Expecting `// <name>`.
    Name,
    /// Expecting the `//` under the name.
    Divider { name: String },
    /// Expecting `// Implements <name>(<args>)`; `name` is the action function.
    Implements { name: String },
    /// Expecting the `ExtraData` marker line.
    ExtraData { name: String, arity: usize },
    /// Expecting `<anything>: <code>`.
    SpecNumber { name: String, arity: usize },
}

impl ScanCursor {
    /// Advance over one line.
    ///
    /// Returns the next cursor and, when a block completes, the entry it
    /// describes. The line is trimmed before matching.
    pub fn step(self, line: &str) -> (ScanCursor, Option<Entry>) {
        let line = line.trim();
        match self {
            ScanCursor::Start => {
                if line == DIVIDER {
                    (ScanCursor::Name, None)
                } else {
                    (ScanCursor::Start, None)
                }
            }
            ScanCursor::Name => {
                let tokens: Vec<&str> = line.split_whitespace().collect();
                match tokens.as_slice() {
                    [_, name] => (
                        ScanCursor::Divider {
                            name: (*name).to_string(),
                        },
                        None,
                    ),
                    _ => (ScanCursor::Start, None),
                }
            }
            ScanCursor::Divider { name } => {
                if line == DIVIDER {
                    (ScanCursor::Implements { name }, None)
                } else {
                    (ScanCursor::Start, None)
                }
            }
            ScanCursor::Implements { name: action } => match implemented_name(line) {
                Some(name) => {
                    log::trace!("{action} implements {name}");
                    (
                        ScanCursor::ExtraData {
                            name: name.to_string(),
                            arity: count_segments(line),
                        },
                        None,
                    )
                }
                None => (ScanCursor::Start, None),
            },
            ScanCursor::ExtraData { name, arity } => {
                if is_extra_data_marker(line) {
                    (ScanCursor::SpecNumber { name, arity }, None)
                } else {
                    (ScanCursor::Start, None)
                }
            }
            ScanCursor::SpecNumber { name, arity } => {
                let parts: Vec<&str> = line.split(':').collect();
                let entry = match parts.as_slice() {
                    [_, code] => Some(Entry::new(code.trim(), name, arity)),
                    _ => None,
                };
                (ScanCursor::Start, entry)
            }
        }
    }

    /// Whether the cursor is outside any block.
    pub fn is_start(&self) -> bool {
        matches!(self, ScanCursor::Start)
    }
}

/// Name from an `// Implements Name(args)` line.
///
/// The name taken from the `Implements` line replaces the one captured
/// earlier, which is the action function rather than the special.
fn implemented_name(line: &str) -> Option<&str> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 || tokens[1] != IMPLEMENTS {
        return None;
    }
    tokens[2].split_once('(').map(|(name, _)| name)
}

fn is_extra_data_marker(line: &str) -> bool {
    line.len() >= EXTRA_DATA_MIN_LEN
        && line.get(EXTRA_DATA_COLUMN..EXTRA_DATA_COLUMN + EXTRA_DATA.len()) == Some(EXTRA_DATA)
}

/// Run the cursor over every line, collecting completed entries in order.
pub fn scan_comment_blocks<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Entry> {
    let mut cursor = ScanCursor::Start;
    let mut entries = Vec::new();
    for line in lines {
        let (next, entry) = cursor.step(line);
        cursor = next;
        entries.extend(entry);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(cursor: ScanCursor, lines: &[&str]) -> (ScanCursor, Vec<Entry>) {
        let mut cursor = cursor;
        let mut out = Vec::new();
        for line in lines {
            let (next, entry) = cursor.step(line);
            cursor = next;
            out.extend(entry);
        }
        (cursor, out)
    }

    #[test]
    fn test_start_waits_for_divider() {
        assert_eq!(ScanCursor::Start.step("int x;").0, ScanCursor::Start);
        assert_eq!(ScanCursor::Start.step("  //  ").0, ScanCursor::Name);
    }

    #[test]
    fn test_name_requires_two_tokens() {
        assert_eq!(
            ScanCursor::Name.step("// A_Foo").0,
            ScanCursor::Divider {
                name: "A_Foo".into()
            }
        );
        assert_eq!(ScanCursor::Name.step("// A_Foo bar").0, ScanCursor::Start);
        assert_eq!(ScanCursor::Name.step("//").0, ScanCursor::Start);
    }

    #[test]
    fn test_implements_line_sets_name_and_arity() {
        let cursor = ScanCursor::Implements {
            name: "A_Foo".into(),
        };
        let (next, entry) = cursor.step("// Implements Door_Open(tag, speed, lighttag)");
        assert!(entry.is_none());
        assert_eq!(
            next,
            ScanCursor::ExtraData {
                name: "Door_Open".into(),
                arity: 3
            }
        );
    }

    #[test]
    fn test_implements_mismatches_reset() {
        let cursor = || ScanCursor::Implements {
            name: "A_Foo".into(),
        };
        assert!(cursor().step("// Implements").0.is_start());
        assert!(cursor().step("// Uses Door_Open(tag)").0.is_start());
        assert!(cursor().step("// Implements Door_Open").0.is_start());
    }

    #[test]
    fn test_implements_with_empty_args_counts_one() {
        let cursor = ScanCursor::Implements {
            name: "A_Foo".into(),
        };
        let (next, _) = cursor.step("// Implements Floor_Stop()");
        assert_eq!(
            next,
            ScanCursor::ExtraData {
                name: "Floor_Stop".into(),
                arity: 1
            }
        );
    }

    #[test]
    fn test_extra_data_marker_column() {
        let cursor = || ScanCursor::ExtraData {
            name: "Door_Open".into(),
            arity: 2,
        };
        assert_eq!(
            cursor().step("// * ExtraData: 300").0,
            ScanCursor::SpecNumber {
                name: "Door_Open".into(),
                arity: 2
            }
        );
        // Marker at the wrong column.
        assert!(cursor().step("// ExtraData: 300 ").0.is_start());
        // Too short.
        assert!(cursor().step("// * ExtraData").0.is_start());
    }

    #[test]
    fn test_spec_number_emits_and_resets() {
        let cursor = ScanCursor::SpecNumber {
            name: "Door_Open".into(),
            arity: 2,
        };
        let (next, entry) = cursor.step("// * Hexen:     12");
        assert!(next.is_start());
        assert_eq!(entry, Some(Entry::new("12", "Door_Open", 2)));
    }

    #[test]
    fn test_spec_number_requires_single_colon() {
        let cursor = ScanCursor::SpecNumber {
            name: "Door_Open".into(),
            arity: 2,
        };
        let (next, entry) = cursor.step("// * Hexen: 12: 13");
        assert!(next.is_start());
        assert!(entry.is_none());
    }

    #[test]
    fn test_full_block() {
        let (cursor, entries) = run(
            ScanCursor::Start,
            &[
                "//",
                "// P_SomeAction",
                "//",
                "// Implements Special_Foo(arg1, arg2, arg3)",
                "// * ExtraData: 300",
                "// * Hexen:     7",
            ],
        );
        assert!(cursor.is_start());
        assert_eq!(entries, vec![Entry::new("7", "Special_Foo", 3)]);
    }

    #[test]
    fn test_mismatching_line_is_not_reconsidered() {
        // The second `//` resets the cursor instead of restarting a block.
        let entries = scan_comment_blocks([
            "//",
            "//",
            "// A_Foo",
            "//",
            "// Implements Foo(a)",
            "// * ExtraData: 300",
            "// * Hexen: 1",
        ]);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_scan_collects_blocks_in_order() {
        let text = "\
//
// A_Second
//
// Implements Second(a, b)
// * ExtraData: 301
// * Hexen:     42
void A_Second() {}

//
// A_First
//
// Implements First(a)
// * ExtraData: 302
// * Hexen:     5
";
        let entries = scan_comment_blocks(text.lines());
        assert_eq!(
            entries,
            vec![Entry::new("42", "Second", 2), Entry::new("5", "First", 1)]
        );
    }
}
