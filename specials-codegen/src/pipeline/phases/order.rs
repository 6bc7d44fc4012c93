//! Order phase - puts entries in table order.

use eyre::Result;

use crate::{
    pipeline::{CompilationContext, Phase},
    table::sort_entries,
};

/// Phase that sorts entries for sorted tables and leaves streamed ones alone.
pub struct OrderPhase;

impl Phase for OrderPhase {
    fn name(&self) -> &'static str {
        "order"
    }

    fn description(&self) -> &'static str {
        "Sort entries by padded code"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        if ctx.style().is_sorted() {
            sort_entries(&mut ctx.entries);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use specials_core::Entry;
    use specials_source::SourceFile;

    use super::*;
    use crate::pipeline::ScanRequest;

    fn entries() -> Vec<Entry> {
        vec![Entry::new("42", "B", 1), Entry::new("5", "A", 1)]
    }

    #[test]
    fn test_sorts_comment_block_entries() {
        let request = ScanRequest::comment_block(SourceFile::from_text("a.cpp", ""));
        let mut ctx = CompilationContext::new(request);
        ctx.entries = entries();
        OrderPhase.run(&mut ctx).unwrap();
        assert_eq!(ctx.entries[0].code.as_str(), "5");
    }

    #[test]
    fn test_keeps_cross_reference_order() {
        let request = ScanRequest::cross_reference(
            SourceFile::from_text("b.cpp", ""),
            SourceFile::from_text("a.cpp", ""),
        );
        let mut ctx = CompilationContext::new(request);
        ctx.entries = entries();
        OrderPhase.run(&mut ctx).unwrap();
        assert_eq!(ctx.entries, entries());
    }
}
