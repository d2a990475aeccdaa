use serde::Serialize;

use crate::formatting::inline::Span;

/// Heading depth, taken from the number of leading `#` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// Secondary heading style, chosen by the taxonomy's heading triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingVariant {
    /// Ordinary section heading.
    #[default]
    Narrative,
    /// Heading whose text contains one of the configured trigger substrings.
    Analysis,
}

/// Flat classification of a [`Block`], one entry per layout kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
    UnorderedList,
    CodeBlock,
    Spacer,
}

/// A unit of vertical layout derived from one or more report lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// `# `, `## ` or `### ` line with the marker stripped.
    Heading {
        level: HeadingLevel,
        variant: HeadingVariant,
        spans: Vec<Span>,
    },
    /// Any other non-blank line.
    Paragraph { spans: Vec<Span> },
    /// A run of consecutive `- ` / `* ` lines, one item per line.
    UnorderedList { items: Vec<Vec<Span>> },
    /// Lines between two ``` fences, fences excluded.
    CodeBlock {
        /// Text following the opening fence, if any.
        info: Option<String>,
        code: String,
    },
    /// A blank line.
    Spacer,
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading { level, .. } => match level {
                HeadingLevel::H1 => BlockKind::Heading1,
                HeadingLevel::H2 => BlockKind::Heading2,
                HeadingLevel::H3 => BlockKind::Heading3,
            },
            Block::Paragraph { .. } => BlockKind::Paragraph,
            Block::UnorderedList { .. } => BlockKind::UnorderedList,
            Block::CodeBlock { .. } => BlockKind::CodeBlock,
            Block::Spacer => BlockKind::Spacer,
        }
    }

    /// Inline spans for headings and paragraphs; empty for every other kind.
    pub fn spans(&self) -> &[Span] {
        match self {
            Block::Heading { spans, .. } | Block::Paragraph { spans } => spans,
            _ => &[],
        }
    }

    /// Plain text of the block with all inline styling dropped.
    ///
    /// List items and code lines are joined with `\n`.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { spans, .. } | Block::Paragraph { spans } => join_spans(spans),
            Block::UnorderedList { items } => items
                .iter()
                .map(|item| join_spans(item))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::CodeBlock { code, .. } => code.clone(),
            Block::Spacer => String::new(),
        }
    }
}

fn join_spans(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}
