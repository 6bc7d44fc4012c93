use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for source operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Bundles the text of a file with its display name so error factories
/// don't need both passed around.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a config parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at the line that assigns `key`.
    pub fn validation_error(&self, message: impl Into<String>, key: &str) -> Box<Error> {
        let span = key_offset(&self.src, key).map(|offset| SourceSpan::from((offset, key.len())));
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

/// Byte offset of the first `key = ...` assignment in a TOML document.
fn key_offset(src: &str, key: &str) -> Option<usize> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let body = line.trim_start();
        let indent = line.len() - body.len();
        if let Some(rest) = body.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                return Some(offset + indent);
            }
        }
        offset += line.len();
    }
    None
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help(
        "run from the root of an engine checkout, or pass --root / --actions / --bindings"
    ))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    #[diagnostic(code(genspecials::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(genspecials::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("no specials found in '{path}'")]
    #[diagnostic(
        code(genspecials::no_entries),
        help(
            "expected comment blocks of the form '//', '// Name', '//', '// Implements Name(args)', '// * ExtraData: <n>', '// * Hexen: <code>'"
        )
    )]
    NoEntries { path: PathBuf },
}

impl Error {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create an error for a scan that found nothing.
    pub fn no_entries(path: impl Into<PathBuf>) -> Box<Self> {
        Box::new(Error::NoEntries { path: path.into() })
    }
}
