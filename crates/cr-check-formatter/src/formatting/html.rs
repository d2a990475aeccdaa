//! HTML fragment rendering for formatted reports.
//!
//! Headings are shifted down one level (`#` renders as `<h2>`) so a report
//! can sit under a page title.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{
    blocks::{Block, HeadingVariant},
    inline::{Span, SpanStyle},
};

pub const CITATION_CLASS: &str = "ethics-citation";
pub const ANALYSIS_HEADING_CLASS: &str = "heading-analysis";
pub const SPACER_CLASS: &str = "spacer";

/// Renders blocks as an HTML fragment, one element per line.
pub fn render(blocks: &[Block]) -> String {
    blocks.iter().map(render_block).collect::<Vec<_>>().join("\n")
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading {
            level,
            variant,
            spans,
        } => {
            let tag = format!("h{}", level.depth() + 1);
            let class = match variant {
                HeadingVariant::Analysis => format!(" class=\"{ANALYSIS_HEADING_CLASS}\""),
                HeadingVariant::Narrative => String::new(),
            };
            format!("<{tag}{class}>{}</{tag}>", render_spans(spans))
        }
        Block::Paragraph { spans } => format!("<p>{}</p>", render_spans(spans)),
        Block::UnorderedList { items } => {
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", render_spans(item)))
                .collect();
            format!("<ul>{items}</ul>")
        }
        Block::CodeBlock { info, code } => {
            let class = info
                .as_deref()
                .map(|lang| format!(" class=\"language-{}\"", encode_double_quoted_attribute(lang)))
                .unwrap_or_default();
            format!("<pre><code{class}>{}</code></pre>", encode_text(code))
        }
        Block::Spacer => format!("<div class=\"{SPACER_CLASS}\"></div>"),
    }
}

fn render_spans(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| {
            let text = encode_text(&span.text);
            match span.style {
                SpanStyle::Plain => text.into_owned(),
                SpanStyle::Emphasis => format!("<strong>{text}</strong>"),
                SpanStyle::Citation => format!("<span class=\"{CITATION_CLASS}\">{text}</span>"),
            }
        })
        .collect()
}
