use super::inline::{InlineRules, TaxonomyError};

/// Caller-supplied recognition data for the formatter.
///
/// Holds the inline rule table (citation patterns) and the substrings that
/// mark a heading as [`HeadingVariant::Analysis`](super::blocks::HeadingVariant).
/// Immutable once built, so one taxonomy can serve concurrent `format` calls.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    pub rules: InlineRules,
    pub heading_triggers: Vec<String>,
}

impl Taxonomy {
    pub fn new(rules: InlineRules, heading_triggers: Vec<String>) -> Self {
        Self {
            rules,
            heading_triggers,
        }
    }

    /// Compiles citation patterns and collects heading triggers.
    pub fn from_patterns<P, S, T>(patterns: P, heading_triggers: T) -> Result<Self, TaxonomyError>
    where
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
        T: IntoIterator<Item = String>,
    {
        let rules = InlineRules::citations(patterns)?;
        log::debug!("compiled {} citation rules", rules.len());
        Ok(Self::new(rules, heading_triggers.into_iter().collect()))
    }

    /// Plain substring containment; an empty trigger list never matches.
    pub fn is_analysis_heading(&self, text: &str) -> bool {
        self.heading_triggers
            .iter()
            .any(|t| !t.is_empty() && text.contains(t.as_str()))
    }
}
