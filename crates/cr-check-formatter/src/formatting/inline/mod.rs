//! # Inline Scanning
//!
//! Splits the text of a heading, paragraph or list item into styled spans.
//!
//! ## Architecture
//!
//! Two passes over a line, in precedence order:
//! - The caller's rule table (`rules`) claims citation matches first. A
//!   claimed region is final and is never scanned again.
//! - The leftover text is scanned with a `Cursor` for `**...**` emphasis.
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `SpanStyle`
//! - **`kinds`**: Inline delimiters (Emphasis)
//! - **`rules`**: `InlineRules` ordered regex table and `TaxonomyError`
//! - **`cursor`**: `Cursor` for byte-wise delimiter scanning
//! - **`parser`**: `scan_spans()` entry point

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod rules;
pub mod types;

pub use parser::scan_spans;
pub use rules::{InlineRule, InlineRules, RuleMatch, TaxonomyError};
pub use types::{Span, SpanStyle};
