//! Line builder for indented text output.

/// One indent level, as used by the engine's enumeration tables.
const INDENT: &str = "\t";

/// Fluent API for building tab-indented text line by line.
///
/// # Example
///
/// ```
/// use specials_codegen::builder::CodeBuilder;
///
/// let text = CodeBuilder::table()
///     .line("specials")
///     .indent()
///     .line("  7:Door_Open(3);")
///     .build();
///
/// assert_eq!(text, "specials\n\t  7:Door_Open(3);\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder at indent level zero.
    pub fn table() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Add a line with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Add a line with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the text.
    pub fn build(self) -> String {
        self.buffer
    }
}
