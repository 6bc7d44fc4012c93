//! Rendering entries as an enumeration fragment.

use serde::Serialize;
use specials_core::Entry;

use crate::builder::CodeBuilder;

/// Shape of the emitted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableStyle {
    /// `specials` header, entries sorted by padded code, `,` after every
    /// entry but the last and `;` after the last.
    Sorted,
    /// `special` header, entries in discovery order, unpadded, no
    /// separators.
    Streamed,
}

impl TableStyle {
    pub fn header(&self) -> &'static str {
        match self {
            TableStyle::Sorted => "specials",
            TableStyle::Streamed => "special",
        }
    }

    /// Whether entries are reordered before emission.
    pub fn is_sorted(&self) -> bool {
        matches!(self, TableStyle::Sorted)
    }
}

/// Sort entries into table order.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

/// An enumeration fragment ready to print.
#[derive(Debug, Clone)]
pub struct SpecialsTable<'a> {
    style: TableStyle,
    entries: &'a [Entry],
}

impl<'a> SpecialsTable<'a> {
    /// Wrap entries that are already in the order they should be printed.
    pub fn new(style: TableStyle, entries: &'a [Entry]) -> Self {
        Self { style, entries }
    }

    /// Number of entry lines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the table.
    ///
    /// An empty sorted table renders as the header alone.
    pub fn render(&self) -> String {
        let last = self.entries.len().saturating_sub(1);
        CodeBuilder::table()
            .line(self.style.header())
            .indent()
            .each(self.entries.iter().enumerate(), |b, (i, entry)| {
                b.line(&self.entry_line(entry, i == last))
            })
            .build()
    }

    fn entry_line(&self, entry: &Entry, is_last: bool) -> String {
        match self.style {
            TableStyle::Sorted => {
                let terminator = if is_last { ';' } else { ',' };
                format!("{}{}", entry.to_padded_string(), terminator)
            }
            TableStyle::Streamed => entry.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new("128", "Polyobj_Move", 4),
            Entry::new("5", "Door_Close", 2),
            Entry::new("42", "Special_Bar", 2),
        ]
    }

    #[test]
    fn test_sort_entries_pads_before_comparing() {
        let mut entries = entries();
        sort_entries(&mut entries);
        let codes: Vec<&str> = entries.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["5", "42", "128"]);
    }

    #[test]
    fn test_render_sorted() {
        let mut entries = entries();
        sort_entries(&mut entries);
        let text = SpecialsTable::new(TableStyle::Sorted, &entries).render();
        assert_eq!(
            text,
            "specials\n\t  5:Door_Close(2),\n\t 42:Special_Bar(2),\n\t128:Polyobj_Move(4);\n"
        );
    }

    #[test]
    fn test_render_single_entry_gets_semicolon() {
        let entries = vec![Entry::new("7", "Special_Foo", 3)];
        let text = SpecialsTable::new(TableStyle::Sorted, &entries).render();
        assert_eq!(text, "specials\n\t  7:Special_Foo(3);\n");
    }

    #[test]
    fn test_render_empty_sorted_is_header_only() {
        let text = SpecialsTable::new(TableStyle::Sorted, &[]).render();
        assert_eq!(text, "specials\n");
    }

    #[test]
    fn test_render_streamed_keeps_order() {
        let entries = entries();
        let text = SpecialsTable::new(TableStyle::Streamed, &entries).render();
        assert_eq!(
            text,
            "special\n\t128:Polyobj_Move(4)\n\t5:Door_Close(2)\n\t42:Special_Bar(2)\n"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut first = entries();
        let mut second = entries();
        second.reverse();
        sort_entries(&mut first);
        sort_entries(&mut second);
        assert_eq!(
            SpecialsTable::new(TableStyle::Sorted, &first).render(),
            SpecialsTable::new(TableStyle::Sorted, &second).render()
        );
    }
}
