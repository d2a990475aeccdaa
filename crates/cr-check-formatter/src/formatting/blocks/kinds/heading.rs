use crate::formatting::blocks::types::HeadingLevel;

pub struct Heading;

impl Heading {
    const MARKERS: [(&'static str, HeadingLevel); 3] = [
        ("# ", HeadingLevel::H1),
        ("## ", HeadingLevel::H2),
        ("### ", HeadingLevel::H3),
    ];

    /// Splits a heading line into its level and the text after the marker.
    pub fn strip_marker(line: &str) -> Option<(HeadingLevel, &str)> {
        Self::MARKERS
            .iter()
            .find_map(|(marker, level)| line.strip_prefix(marker).map(|rest| (*level, rest)))
    }
}
