use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for registry and config loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename so error factories only
/// need the details specific to each failure.
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

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a registry parse error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Registry {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a config parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a duplicate tag name error pointing at both declarations.
    pub fn duplicate_tag_error(
        &self,
        tag: impl Into<String>,
        first_component: impl Into<String>,
        second_component: impl Into<String>,
    ) -> Box<Error> {
        let tag = tag.into();
        let needle = format!("\"{}\"", tag);
        let mut spans = self
            .src
            .match_indices(&needle)
            .map(|(idx, m)| SourceSpan::from((idx, m.len())));
        let first_span = spans.next();
        let second_span = spans.next();
        Box::new(Error::DuplicateTagName {
            src: self.named_source(),
            first_span,
            second_span,
            tag,
            first_component: first_component.into(),
            second_component: second_component.into(),
        })
    }
}

/// Convert a 1-based line/column position into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run the metadata extraction step first, or pass --registry"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path '{path}' is not valid UTF-8")]
    #[diagnostic(code(tagtype::non_utf8_path))]
    NonUtf8Path { path: PathBuf },

    #[error("failed to parse component registry")]
    #[diagnostic(code(tagtype::registry_parse))]
    Registry {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse tagtype.toml")]
    #[diagnostic(code(tagtype::config_parse))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate tag name '{tag}'")]
    #[diagnostic(
        code(tagtype::duplicate_tag),
        help("tag names must be unique; rename the tag declared in '{second_component}'")
    )]
    DuplicateTagName {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared by '{first_component}'")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        tag: String,
        first_component: String,
        second_component: String,
    },
}
