//! Hexen binding table.
//!
//! The table maps special names to their numbers:
//!
//! ```text
//! ev_binding_t HexenBindings[] =
//! {
//!    LINESPECNAMED(  1, EV_ActionPolyobjStartLine,  "Polyobj_StartLine")
//!    LINESPECNAMED(  2, EV_ActionPolyobjRotateLeft, "Polyobj_RotateLeft")
//!    ...
//! };
//! ```

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use specials_core::{SpecialCode, leading_word};

const TABLE_OPEN: &str = "{";
const ENTRY_MARKER: &str = "LINESPECNAMED";

static TABLE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[A-Za-z_]\w*(?:\s+[A-Za-z_]\w*)*\s+HexenBindings\b").unwrap()
});
static FIRST_INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());
static QUOTED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([A-Za-z0-9_]+)""#).unwrap());

/// One `LINESPECNAMED` row of the binding table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub code: SpecialCode,
    /// Native action function bound to the special.
    pub identifier: String,
    /// Script-visible special name.
    pub name: String,
    /// 1-based line number in the binding source.
    pub line: usize,
}

impl Binding {
    /// Parse a `LINESPECNAMED(code, Identifier, "Name")` line.
    pub fn parse(line: &str, line_no: usize) -> Option<Self> {
        let code = FIRST_INTEGER.find(line)?.as_str();
        let (_, after_comma) = line.split_once(',')?;
        let identifier = leading_word(after_comma)?;
        let name = QUOTED_NAME.captures(line)?.get(1)?.as_str();

        Some(Self {
            code: SpecialCode::new(code),
            identifier: identifier.to_string(),
            name: name.to_string(),
            line: line_no,
        })
    }

    /// Render as `<code> <identifier> <name>`.
    pub fn echo_line(&self) -> String {
        format!("{} {} {}", self.code, self.identifier, self.name)
    }
}

/// Lookup from special name to its binding.
#[derive(Debug, Clone, Default)]
pub struct BindingMap {
    /// Every accepted row, in source order.
    declarations: Vec<Binding>,
    /// Name to index of its latest declaration.
    by_name: IndexMap<String, usize>,
    /// Names declared more than once.
    duplicates: Vec<Binding>,
}

impl BindingMap {
    /// Build the map by scanning the binding source.
    ///
    /// A `<Type> HexenBindings` declaration starts the table. Inside it a
    /// bare `{` is skipped, `LINESPECNAMED` rows are collected and any other
    /// line ends the table.
    pub fn parse<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut map = Self::default();
        let mut in_table = false;

        for (idx, raw) in lines.into_iter().enumerate() {
            let line = raw.trim();
            if !in_table {
                if TABLE_DECL.is_match(line) {
                    log::debug!("binding table starts at line {}", idx + 1);
                    in_table = true;
                }
                continue;
            }

            if line == TABLE_OPEN {
                continue;
            }
            if !line.starts_with(ENTRY_MARKER) {
                log::debug!("binding table ends at line {}", idx + 1);
                in_table = false;
                continue;
            }

            match Binding::parse(line, idx + 1) {
                Some(binding) => map.insert(binding),
                None => log::debug!("skipping malformed binding at line {}: {}", idx + 1, line),
            }
        }

        map
    }

    fn insert(&mut self, binding: Binding) {
        let index = self.declarations.len();
        if let Some(previous) = self.by_name.insert(binding.name.clone(), index) {
            log::warn!(
                "special '{}' bound twice (lines {} and {})",
                binding.name,
                self.declarations[previous].line,
                binding.line
            );
            self.duplicates.push(binding.clone());
        }
        self.declarations.push(binding);
    }

    /// Get the binding for a special name.
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.by_name.get(name).map(|&i| &self.declarations[i])
    }

    /// Get the code bound to a special name.
    pub fn code(&self, name: &str) -> Option<&SpecialCode> {
        self.get(name).map(|b| &b.code)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// All accepted rows in source order, duplicates included.
    pub fn declarations(&self) -> &[Binding] {
        &self.declarations
    }

    /// Rows whose name had already been bound.
    pub fn duplicates(&self) -> &[Binding] {
        &self.duplicates
    }
}
