use super::{
    cursor::Cursor,
    kinds::Emphasis,
    rules::InlineRules,
    types::{Span, SpanStyle},
};

/// Scans one line of text into styled [`Span`]s.
///
/// # Precedence
/// Rule matches (citations) are taken first and kept verbatim; `**` inside a
/// citation is not treated as emphasis. Only the text between rule matches
/// is scanned for `**...**` runs.
///
/// # Returns
/// Spans covering the whole input minus emphasis delimiters. Empty spans are
/// never produced, so empty input gives an empty vector.
pub fn scan_spans(s: &str, rules: &InlineRules) -> Vec<Span> {
    let mut out = vec![];
    let mut pos = 0;

    while let Some(m) = rules.next_match(s, pos) {
        scan_emphasis(&s[pos..m.start], &mut out);
        out.push(Span::new(&s[m.start..m.end], m.style));
        pos = m.end;
    }

    scan_emphasis(&s[pos..], &mut out);
    out
}

/// Splits text on `**...**` runs, shortest run first.
fn scan_emphasis(s: &str, out: &mut Vec<Span>) {
    let mut cur = Cursor::new(s);
    let mut text_start = cur.pos();

    while !cur.eof() {
        if let Some((start, inner_start, inner_end)) = try_parse_emphasis(&mut cur) {
            push_span(out, &s[text_start..start], SpanStyle::Plain);
            push_span(out, &s[inner_start..inner_end], SpanStyle::Emphasis);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    push_span(out, &s[text_start..], SpanStyle::Plain);
}

/// Attempts to parse `**inner**` at the current position.
///
/// Returns `(start, inner_start, inner_end)`. On failure the cursor is restored.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<(usize, usize, usize)> {
    if !cur.starts_with(Emphasis::DELIM) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(Emphasis::DELIM.len());
    let inner_start = cur.pos();

    while !cur.eof() && !cur.starts_with(Emphasis::DELIM) {
        cur.bump();
    }
    let inner_end = cur.pos();

    if !cur.starts_with(Emphasis::DELIM) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump_n(Emphasis::DELIM.len());

    Some((start, inner_start, inner_end))
}

fn push_span(out: &mut Vec<Span>, text: &str, style: SpanStyle) {
    if !text.is_empty() {
        out.push(Span::new(text, style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(s: &str) -> Vec<Span> {
        scan_spans(s, &InlineRules::new())
    }

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(scan("hello world"), vec![Span::plain("hello world")]);
    }

    #[test]
    fn empty_input_has_no_spans() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn bold_run_becomes_emphasis() {
        assert_eq!(
            scan("This is **bold** text."),
            vec![
                Span::plain("This is "),
                Span::emphasis("bold"),
                Span::plain(" text.")
            ]
        );
    }

    #[test]
    fn several_bold_runs() {
        assert_eq!(
            scan("**a** and **b**"),
            vec![Span::emphasis("a"), Span::plain(" and "), Span::emphasis("b")]
        );
    }

    #[test]
    fn unclosed_delimiter_stays_plain() {
        assert_eq!(scan("a ** b"), vec![Span::plain("a ** b")]);
        assert_eq!(scan("**a** b **c"), vec![
            Span::emphasis("a"),
            Span::plain(" b **c")
        ]);
    }

    #[test]
    fn empty_bold_run_is_dropped() {
        assert_eq!(scan("x****y"), vec![Span::plain("x"), Span::plain("y")]);
    }

    #[test]
    fn shortest_run_wins() {
        assert_eq!(
            scan("***a***"),
            vec![Span::emphasis("*a"), Span::plain("*")]
        );
    }

    #[test]
    fn emphasis_around_multibyte_text() {
        assert_eq!(
            scan("보도 **사실 확인** 필요"),
            vec![
                Span::plain("보도 "),
                Span::emphasis("사실 확인"),
                Span::plain(" 필요")
            ]
        );
    }

    #[test]
    fn citation_splits_plain_text() {
        let rules = InlineRules::citations([r"REGCODE-\d+"]).unwrap();
        assert_eq!(
            scan_spans("See REGCODE-12 for details.", &rules),
            vec![
                Span::plain("See "),
                Span::citation("REGCODE-12"),
                Span::plain(" for details.")
            ]
        );
    }

    #[test]
    fn citation_is_not_resplit_for_emphasis() {
        let rules = InlineRules::citations([r"Code \S+ \*\*art\*\*"]).unwrap();
        assert_eq!(
            scan_spans("per Code X **art** and **more**", &rules),
            vec![
                Span::plain("per "),
                Span::citation("Code X **art**"),
                Span::plain(" and "),
                Span::emphasis("more")
            ]
        );
    }

    #[test]
    fn emphasis_does_not_span_a_citation() {
        let rules = InlineRules::citations(["CITE"]).unwrap();
        assert_eq!(
            scan_spans("**a CITE b**", &rules),
            vec![
                Span::plain("**a "),
                Span::citation("CITE"),
                Span::plain(" b**")
            ]
        );
    }
}
