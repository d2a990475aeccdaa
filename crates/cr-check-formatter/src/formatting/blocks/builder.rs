use crate::formatting::{
    inline::{Span, scan_spans},
    taxonomy::Taxonomy,
};

use super::{
    classify::{LineClass, LineKind},
    types::{Block, HeadingVariant},
};

#[derive(Debug, Default)]
enum RunState {
    #[default]
    Normal,
    Code {
        info: Option<String>,
        lines: Vec<String>,
    },
    List {
        items: Vec<Vec<Span>>,
    },
}

/// Turns classified lines into [`Block`]s.
///
/// Three states: normal, inside a code fence, inside a run of list items.
/// Fences are raw zones: nothing inside them is classified or scanned.
pub struct BlockBuilder<'t> {
    taxonomy: &'t Taxonomy,
    state: RunState,
    out: Vec<Block>,
}

impl<'t> BlockBuilder<'t> {
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        Self {
            taxonomy,
            state: RunState::Normal,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if let RunState::Code { lines, .. } = &mut self.state {
            if matches!(c.kind, LineKind::Fence { .. }) {
                self.flush();
            } else {
                lines.push(c.raw.to_string());
            }
            return;
        }

        if let (RunState::List { items }, LineKind::ListItem { text }) = (&mut self.state, &c.kind)
        {
            items.push(scan_spans(text, &self.taxonomy.rules));
            return;
        }

        self.flush();

        match &c.kind {
            LineKind::Heading { level, text } => {
                let variant = if self.taxonomy.is_analysis_heading(text) {
                    HeadingVariant::Analysis
                } else {
                    HeadingVariant::Narrative
                };
                self.out.push(Block::Heading {
                    level: *level,
                    variant,
                    spans: scan_spans(text, &self.taxonomy.rules),
                });
            }
            LineKind::Fence { info } => {
                self.state = RunState::Code {
                    info: info.clone(),
                    lines: vec![],
                };
            }
            LineKind::ListItem { text } => {
                self.state = RunState::List {
                    items: vec![scan_spans(text, &self.taxonomy.rules)],
                };
            }
            LineKind::Blank => self.out.push(Block::Spacer),
            LineKind::Text => self.out.push(Block::Paragraph {
                spans: scan_spans(c.raw, &self.taxonomy.rules),
            }),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush: an unterminated fence still becomes a code block.
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        match std::mem::take(&mut self.state) {
            RunState::Normal => {}
            RunState::Code { info, lines } => self.out.push(Block::CodeBlock {
                info,
                code: lines.join("\n"),
            }),
            RunState::List { items } => self.out.push(Block::UnorderedList { items }),
        }
    }
}
