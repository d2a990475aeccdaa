use cr_check_formatter::{Block, HeadingLevel, HeadingVariant, Span, SpanStyle};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span as TextSpan},
};

const BULLET: &str = "• ";
const CODE_INDENT: &str = "    ";

fn heading_style(level: HeadingLevel, variant: HeadingVariant) -> Style {
    let color = match (variant, level) {
        (HeadingVariant::Analysis, _) => Color::Yellow,
        (HeadingVariant::Narrative, HeadingLevel::H1) => Color::Cyan,
        (HeadingVariant::Narrative, HeadingLevel::H2) => Color::LightBlue,
        (HeadingVariant::Narrative, HeadingLevel::H3) => Color::Blue,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn span_style(style: SpanStyle) -> Style {
    match style {
        SpanStyle::Plain => Style::default(),
        SpanStyle::Emphasis => Style::default().add_modifier(Modifier::BOLD),
        SpanStyle::Citation => Style::default()
            .fg(Color::Black)
            .bg(Color::LightYellow),
    }
}

fn styled_spans(spans: &[Span], base: Style) -> Vec<TextSpan<'static>> {
    spans
        .iter()
        .map(|s| TextSpan::styled(s.text.clone(), base.patch(span_style(s.style))))
        .collect()
}

/// Converts formatted blocks to terminal lines, one or more per block.
pub fn report_lines(blocks: &[Block]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            Block::Heading {
                level,
                variant,
                spans,
            } => {
                let style = heading_style(*level, *variant);
                let mut content = vec![TextSpan::styled(
                    format!("{} ", "#".repeat(level.depth() as usize)),
                    style,
                )];
                content.extend(styled_spans(spans, style));
                lines.push(Line::from(content));
            }
            Block::Paragraph { spans } => {
                lines.push(Line::from(styled_spans(spans, Style::default())));
            }
            Block::UnorderedList { items } => {
                for item in items {
                    let mut content = vec![TextSpan::raw(BULLET)];
                    content.extend(styled_spans(item, Style::default()));
                    lines.push(Line::from(content));
                }
            }
            Block::CodeBlock { code, .. } => {
                let style = Style::default().fg(Color::Gray);
                for code_line in code.split('\n') {
                    lines.push(Line::from(TextSpan::styled(
                        format!("{CODE_INDENT}{code_line}"),
                        style,
                    )));
                }
            }
            Block::Spacer => lines.push(Line::default()),
        }
    }

    lines
}
