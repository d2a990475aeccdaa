//! # Block Formatting
//!
//! Two-phase block formatting over report lines.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from its prefix alone (heading, fence, list marker, blank, text)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` groups classified
//!    lines into `Block`s, tracking whether it is inside a fence or a list run
//!
//! ## Modules
//!
//! - **`types`**: Output types (`Block`, `BlockKind`, `HeadingLevel`, `HeadingVariant`)
//! - **`kinds`**: Marker detection owned by each block kind (CodeFence, Heading, ListItem)
//! - **`classify`**: `ReportLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Blocks come out in source order
//! - Fenced code is a raw zone: no classification or inline scanning inside
//! - Every blank line outside a fence is exactly one `Spacer`

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, ReportLineClassifier};
pub use types::{Block, BlockKind, HeadingLevel, HeadingVariant};
