pub mod blocks;
pub mod html;
pub mod inline;
pub mod taxonomy;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, ReportLineClassifier};
use taxonomy::Taxonomy;

/// Formats report text into blocks.
///
/// Lines are split on `\n`; a trailing `\r` on a line is ignored. Total over
/// all inputs: the empty string gives no blocks, and an unterminated fence
/// runs to the end of the text.
pub fn format(text: &str, taxonomy: &Taxonomy) -> Vec<Block> {
    if text.is_empty() {
        return vec![];
    }

    let classifier = ReportLineClassifier;
    let mut builder = BlockBuilder::new(taxonomy);

    for line in text.split('\n') {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish()
}
