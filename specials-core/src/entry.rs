use std::fmt;

use serde::Serialize;

/// Width the emitted table pads special codes to.
pub const CODE_WIDTH: usize = 3;

/// A line-special number as it appears in the scanned source.
///
/// The text is kept verbatim; it is not checked to be numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SpecialCode(String);

impl SpecialCode {
    /// Create a code from its source text.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as written in the source.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Left-pad the code with spaces to [`CODE_WIDTH`].
    ///
    /// Codes that are already at least that wide are returned unchanged.
    pub fn padded(&self) -> String {
        format!("{:>width$}", self.0, width = CODE_WIDTH)
    }
}

impl fmt::Display for SpecialCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SpecialCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One special handler discovered in the scanned source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    pub code: SpecialCode,
    pub name: String,
    pub arity: usize,
}

impl Entry {
    pub fn new(code: impl Into<SpecialCode>, name: impl Into<String>, arity: usize) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            arity,
        }
    }

    /// Ordering key of the sorted table: padded code, then name, then arity.
    pub fn sort_key(&self) -> (String, &str, usize) {
        (self.code.padded(), &self.name, self.arity)
    }

    /// Render as `<padded code>:<name>(<arity>)`.
    pub fn to_padded_string(&self) -> String {
        format!("{}:{}({})", self.code.padded(), self.name, self.arity)
    }
}

/// Renders as `<code>:<name>(<arity>)` with the code unpadded.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}({})", self.code, self.name, self.arity)
    }
}
