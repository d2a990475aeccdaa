//! Behavioural tests for `format`.
//!
//! Each test pins one property of the block/span output; rendering is
//! covered by the integration tests.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::formatting::{
    blocks::{Block, BlockKind, HeadingLevel, HeadingVariant},
    format,
    inline::Span,
    taxonomy::Taxonomy,
};

fn kinds(blocks: &[Block]) -> Vec<BlockKind> {
    blocks.iter().map(Block::kind).collect()
}

fn citations(patterns: &[&str]) -> Taxonomy {
    Taxonomy::from_patterns(patterns.iter().copied(), Vec::new()).unwrap()
}

#[test]
fn empty_input_yields_no_blocks() {
    assert!(format("", &Taxonomy::default()).is_empty());
}

#[rstest]
#[case("# Title", BlockKind::Heading1)]
#[case("## Title", BlockKind::Heading2)]
#[case("### Title", BlockKind::Heading3)]
fn heading_level_matches_hash_count(#[case] line: &str, #[case] kind: BlockKind) {
    let blocks = format(line, &Taxonomy::default());
    assert_eq!(kinds(&blocks), vec![kind]);
    assert_eq!(blocks[0].plain_text(), "Title");
}

#[test]
fn four_hashes_is_a_paragraph() {
    let blocks = format("#### Title", &Taxonomy::default());
    assert_eq!(blocks, vec![Block::Paragraph {
        spans: vec![Span::plain("#### Title")]
    }]);
}

#[test]
fn consecutive_list_lines_merge() {
    let blocks = format("- first\n* second", &Taxonomy::default());
    assert_eq!(blocks, vec![Block::UnorderedList {
        items: vec![vec![Span::plain("first")], vec![Span::plain("second")]]
    }]);
}

#[test]
fn fenced_lines_become_one_code_block() {
    let blocks = format("```\nlet a = 1;\n\n# raw\n```", &Taxonomy::default());
    assert_eq!(blocks, vec![Block::CodeBlock {
        info: None,
        code: "let a = 1;\n\n# raw".to_string()
    }]);
}

#[test]
fn unterminated_fence_consumes_rest() {
    let blocks = format("intro\n```\ncode\n- still code", &Taxonomy::default());
    assert_eq!(kinds(&blocks), vec![BlockKind::Paragraph, BlockKind::CodeBlock]);
    assert_eq!(blocks[1].plain_text(), "code\n- still code");
}

#[test]
fn citation_boundaries_are_exact() {
    let blocks = format("See REGCODE-12 for details.", &citations(&[r"REGCODE-\d+"]));
    assert_eq!(blocks, vec![Block::Paragraph {
        spans: vec![
            Span::plain("See "),
            Span::citation("REGCODE-12"),
            Span::plain(" for details.")
        ]
    }]);
}

#[test]
fn emphasis_without_citations() {
    let blocks = format("This is **bold** text.", &citations(&[r"REGCODE-\d+"]));
    assert_eq!(blocks, vec![Block::Paragraph {
        spans: vec![
            Span::plain("This is "),
            Span::emphasis("bold"),
            Span::plain(" text.")
        ]
    }]);
}

#[test]
fn blank_line_between_paragraphs_is_one_spacer() {
    let blocks = format("one\n\ntwo", &Taxonomy::default());
    assert_eq!(kinds(&blocks), vec![
        BlockKind::Paragraph,
        BlockKind::Spacer,
        BlockKind::Paragraph
    ]);
}

#[test]
fn consecutive_blank_lines_are_not_merged() {
    let blocks = format("one\n\n  \ntwo", &Taxonomy::default());
    assert_eq!(kinds(&blocks), vec![
        BlockKind::Paragraph,
        BlockKind::Spacer,
        BlockKind::Spacer,
        BlockKind::Paragraph
    ]);
}

#[test]
fn trailing_newline_yields_trailing_spacer() {
    let blocks = format("one\n", &Taxonomy::default());
    assert_eq!(kinds(&blocks), vec![BlockKind::Paragraph, BlockKind::Spacer]);
}

#[test]
fn crlf_line_endings() {
    let blocks = format("# Head\r\n- a\r\n- b\r\n", &Taxonomy::default());
    assert_eq!(kinds(&blocks), vec![
        BlockKind::Heading1,
        BlockKind::UnorderedList,
        BlockKind::Spacer
    ]);
    assert_eq!(blocks[1].plain_text(), "a\nb");
}

#[test]
fn headings_and_list_items_are_scanned() {
    let taxonomy = citations(&[r"Art\. \d+"]);
    let blocks = format("## **Key** Art. 3\n- per Art. 4", &taxonomy);
    assert_eq!(blocks, vec![
        Block::Heading {
            level: HeadingLevel::H2,
            variant: HeadingVariant::Narrative,
            spans: vec![
                Span::emphasis("Key"),
                Span::plain(" "),
                Span::citation("Art. 3")
            ]
        },
        Block::UnorderedList {
            items: vec![vec![Span::plain("per "), Span::citation("Art. 4")]]
        }
    ]);
}

#[test]
fn heading_variant_from_triggers() {
    let taxonomy = Taxonomy::from_patterns(Vec::<&str>::new(), vec!["분석".to_string()]).unwrap();
    let blocks = format("# 종합 분석\n# 기사 요약\n분석 paragraph", &taxonomy);
    let variants: Vec<_> = blocks
        .iter()
        .filter_map(|b| match b {
            Block::Heading { variant, .. } => Some(*variant),
            _ => None,
        })
        .collect();
    assert_eq!(variants, vec![HeadingVariant::Analysis, HeadingVariant::Narrative]);
    assert_eq!(blocks[2].kind(), BlockKind::Paragraph);
}

#[test]
fn ethics_code_citations_capture_trailing_clause() {
    let taxonomy = citations(&[
        r"언론윤리헌장\s*제\s*\d+조[^.\n]*",
        r"신문윤리실천요강\s*제\s*\d+조[^.\n]*",
    ]);
    let blocks = format(
        "이 기사는 신문윤리실천요강 제3조(보도준칙)를 위반했다. 추가 검토 필요.",
        &taxonomy,
    );
    assert_eq!(blocks[0].spans(), &[
        Span::plain("이 기사는 "),
        Span::citation("신문윤리실천요강 제3조(보도준칙)를 위반했다"),
        Span::plain(". 추가 검토 필요.")
    ]);
}

/// Concatenating span text restores each line minus formatting syntax.
#[test]
fn text_is_preserved_except_markers() {
    let taxonomy = citations(&[r"REGCODE-\d+"]);
    let input = "# Head **x**\nBody REGCODE-1 **y** z\n- item **w**";
    let blocks = format(input, &taxonomy);
    let texts: Vec<String> = blocks.iter().map(Block::plain_text).collect();
    assert_eq!(texts, vec!["Head x", "Body REGCODE-1 y z", "item w"]);
}

#[test]
fn formatting_is_idempotent() {
    let taxonomy = citations(&[r"REGCODE-\d+"]);
    let input = "# A\n\n- b\n- c REGCODE-9\n```\nd\n```\n**e**";
    assert_eq!(format(input, &taxonomy), format(input, &taxonomy));
}

#[test]
fn arbitrary_inputs_terminate() {
    let taxonomy = citations(&[r"\**", r"x?"]);
    for input in ["*", "**", "***", "```", "\n\n", "- ", "# ", "\r", "가**나"] {
        let _ = format(input, &taxonomy);
    }
}
