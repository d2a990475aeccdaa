pub mod export;
pub mod formatting;
pub mod io;
pub mod models;

// Re-export key types for easier usage
pub use formatting::{
    blocks::{Block, BlockKind, HeadingLevel, HeadingVariant},
    format,
    inline::{InlineRules, Span, SpanStyle, TaxonomyError},
    taxonomy::Taxonomy,
};
pub use io::*;
pub use models::*;
