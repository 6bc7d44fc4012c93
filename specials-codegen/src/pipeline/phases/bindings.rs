//! Bindings phase - builds the name to code lookup.

use eyre::Result;
use specials_source::BindingMap;

use crate::pipeline::{CompilationContext, Phase, ScanMode};

/// Phase that parses the Hexen binding table.
///
/// Does nothing for comment-block scans.
pub struct BindingsPhase;

impl Phase for BindingsPhase {
    fn name(&self) -> &'static str {
        "bindings"
    }

    fn description(&self) -> &'static str {
        "Read the binding table"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let ScanMode::CrossReference { bindings } = &ctx.request.mode else {
            return Ok(());
        };

        let map = BindingMap::parse(bindings.lines());
        log::info!("{}: {} bindings", bindings.path().display(), map.len());
        ctx.bindings = Some(map);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use specials_source::SourceFile;

    use super::*;
    use crate::pipeline::ScanRequest;

    #[test]
    fn test_skipped_for_comment_blocks() {
        let request = ScanRequest::comment_block(SourceFile::from_text("a.cpp", ""));
        let mut ctx = CompilationContext::new(request);
        BindingsPhase.run(&mut ctx).unwrap();
        assert!(ctx.bindings.is_none());
    }

    #[test]
    fn test_builds_map() {
        let request = ScanRequest::cross_reference(
            SourceFile::from_text(
                "ev_bindings.cpp",
                "ev_binding_t HexenBindings[] =\n{\n   LINESPECNAMED(42, SomeId, \"Special_Bar\")\n};\n",
            ),
            SourceFile::from_text("ev_actions.cpp", ""),
        );
        let mut ctx = CompilationContext::new(request);
        BindingsPhase.run(&mut ctx).unwrap();

        let map = ctx.bindings.expect("bindings");
        assert_eq!(map.len(), 1);
        assert!(map.contains("Special_Bar"));
    }
}
