use super::{
    kinds::{CodeFence, Heading, ListItem},
    types::HeadingLevel,
};

/// What a single line looks like on its own, without surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading { level: HeadingLevel, text: &'a str },
    Fence { info: Option<String> },
    ListItem { text: &'a str },
    Blank,
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of formatting: each line is classified independently.
/// Whether a line is actually code depends on the builder's state.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// The line as it appeared in the report, without its line terminator.
    pub raw: &'a str,
    pub kind: LineKind<'a>,
}

/// Classifies report lines by their prefix.
pub struct ReportLineClassifier;

impl ReportLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Prefixes are tested in a fixed order: headings, fences, list markers,
    /// then blank. Leading whitespace disables every marker.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let raw = line.strip_suffix('\r').unwrap_or(line);

        let kind = if let Some((level, text)) = Heading::strip_marker(raw) {
            LineKind::Heading { level, text }
        } else if CodeFence::is_fence(raw) {
            LineKind::Fence {
                info: CodeFence::info(raw),
            }
        } else if let Some(text) = ListItem::strip_marker(raw) {
            LineKind::ListItem { text }
        } else if raw.trim().is_empty() {
            LineKind::Blank
        } else {
            LineKind::Text
        };

        LineClass { raw, kind }
    }
}
