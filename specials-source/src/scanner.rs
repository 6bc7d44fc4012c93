//! One scanner over both comment styles.

use specials_core::Entry;

use crate::{BindingMap, ImplementsRef, SourceFile, cursor::scan_comment_blocks};

/// How specials are discovered in the action source.
#[derive(Debug, Clone, Copy)]
pub enum Scanner<'a> {
    /// Strict six-line comment blocks carrying their own code.
    CommentBlock,
    /// Loose `implements` comments resolved through a binding table.
    CrossReference(&'a BindingMap),
}

/// An `implements` reference with no binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    pub name: String,
    /// 1-based line number in the action source.
    pub line: usize,
}

/// What a scan found.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Entries in discovery order.
    pub entries: Vec<Entry>,
    /// References that were skipped because their name is unbound.
    pub unresolved: Vec<Unresolved>,
}

impl Scanner<'_> {
    pub fn scan(&self, source: &SourceFile) -> ScanOutcome {
        let outcome = match self {
            Scanner::CommentBlock => ScanOutcome {
                entries: scan_comment_blocks(source.lines()),
                unresolved: Vec::new(),
            },
            Scanner::CrossReference(bindings) => scan_references(source, bindings),
        };
        log::info!(
            "{}: {} specials, {} unresolved",
            source.path().display(),
            outcome.entries.len(),
            outcome.unresolved.len()
        );
        outcome
    }
}

fn scan_references(source: &SourceFile, bindings: &BindingMap) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    for (idx, line) in source.lines().enumerate() {
        let Some(reference) = ImplementsRef::parse(line) else {
            continue;
        };
        match bindings.code(&reference.name) {
            Some(code) => outcome
                .entries
                .push(Entry::new(code.clone(), reference.name, reference.arity)),
            None => {
                log::debug!("line {}: '{}' has no binding", idx + 1, reference.name);
                outcome.unresolved.push(Unresolved {
                    name: reference.name,
                    line: idx + 1,
                });
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTIONS: &str = "\
//
// EV_ActionOpenDoor
//
// Implements Door_Open(tag, speed, lighttag)
// * ExtraData: 300
// * Hexen:     11
//
static bool EV_ActionOpenDoor(ev_action_t *action, ev_instance_t *instance)
{
}

// implements Special_Bar(a,b)
// Implements Missing_Special(a)
";

    #[test]
    fn test_comment_block_mode() {
        let source = SourceFile::from_text("ev_actions.cpp", ACTIONS);
        let outcome = Scanner::CommentBlock.scan(&source);
        assert_eq!(outcome.entries, vec![Entry::new("11", "Door_Open", 3)]);
        assert!(outcome.unresolved.is_empty());
    }

    #[test]
    fn test_cross_reference_mode() {
        let bindings = BindingMap::parse(
            [
                "ev_binding_t HexenBindings[] =",
                "{",
                r#"   LINESPECNAMED(11, EV_ActionOpenDoor, "Door_Open")"#,
                r#"   LINESPECNAMED(42, SomeId, "Special_Bar")"#,
                "};",
            ]
            .into_iter(),
        );
        let source = SourceFile::from_text("ev_actions.cpp", ACTIONS);
        let outcome = Scanner::CrossReference(&bindings).scan(&source);

        assert_eq!(
            outcome.entries,
            vec![
                Entry::new("11", "Door_Open", 3),
                Entry::new("42", "Special_Bar", 2),
            ]
        );
        assert_eq!(
            outcome.unresolved,
            vec![Unresolved {
                name: "Missing_Special".into(),
                line: 13
            }]
        );
    }
}
