use regex::{Match, Regex};
use thiserror::Error;

use super::types::SpanStyle;

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("Invalid inline pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// One entry of the inline rule table.
#[derive(Debug, Clone)]
pub struct InlineRule {
    pub regex: Regex,
    pub style: SpanStyle,
}

/// Ordered `(pattern, style)` table evaluated before emphasis scanning.
///
/// At any position the earliest match wins; matches starting at the same
/// byte go to the rule pushed first. Zero-length matches are skipped.
#[derive(Debug, Clone, Default)]
pub struct InlineRules {
    rules: Vec<InlineRule>,
}

/// A rule hit inside a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    pub start: usize,
    pub end: usize,
    pub style: SpanStyle,
}

impl InlineRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table where every pattern is a [`SpanStyle::Citation`] rule.
    pub fn citations<I, S>(patterns: I) -> Result<Self, TaxonomyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules = Self::new();
        for pattern in patterns {
            rules.push(pattern.as_ref(), SpanStyle::Citation)?;
        }
        Ok(rules)
    }

    pub fn push(&mut self, pattern: &str, style: SpanStyle) -> Result<(), TaxonomyError> {
        let regex = Regex::new(pattern).map_err(|source| TaxonomyError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        self.rules.push(InlineRule { regex, style });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InlineRule> {
        self.rules.iter()
    }

    /// Finds the next non-empty rule match starting at or after `from`.
    pub fn next_match(&self, hay: &str, from: usize) -> Option<RuleMatch> {
        let mut best: Option<RuleMatch> = None;
        for rule in &self.rules {
            let Some(m) = non_empty_match(&rule.regex, hay, from) else {
                continue;
            };
            // Strict `<` keeps the earlier rule on ties.
            if best.is_none_or(|b| m.start() < b.start) {
                best = Some(RuleMatch {
                    start: m.start(),
                    end: m.end(),
                    style: rule.style,
                });
            }
        }
        best
    }
}

fn non_empty_match<'h>(re: &Regex, hay: &'h str, from: usize) -> Option<Match<'h>> {
    let mut at = from;
    while at <= hay.len() {
        let m = re.find_at(hay, at)?;
        if !m.is_empty() {
            return Some(m);
        }
        // Step past the empty match to the next char boundary.
        at = m.end() + hay[m.end()..].chars().next().map_or(1, char::len_utf8);
    }
    None
}
