use serde::{Deserialize, Serialize};

/// Style of an inline run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanStyle {
    Plain,
    /// Text that was wrapped in `**` delimiters.
    Emphasis,
    /// Text matched by a citation rule, kept verbatim.
    Citation,
}

/// A run of inline text with its style. Markers are already stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Plain)
    }

    pub fn emphasis(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Emphasis)
    }

    pub fn citation(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Citation)
    }
}
