//! # Block Segmentation
//!
//! Splits a cleaned document into one text block per top-level question.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line gets a [`LineRole`]
//!    (unit delimiter, type marker, separator, end-of-unit marker or text)
//!
//! 2. **Block Construction** (`builder`): a [`BlockBuilder`] tracks unit membership
//!    and emits blocks as they close
//!
//! ## Key Invariants
//!
//! - `[<br>]` separates top-level questions only outside a unit; inside it
//!   separates children and stays in the block
//! - A unit (`[<sg>]` through `[</sg>]`) is always one block, together with the
//!   `(NHOM)` / `(DIENKHUYET)` header line right before it
//! - A line holding nothing but a type marker always starts a new block, which
//!   closes a unit whose `[</sg>]` is missing
//! - Emitted blocks are trimmed and never empty

pub mod builder;
pub mod classify;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineRole, MarkupLineClassifier};

use log::debug;

/// Splits a cleaned document into ordered question blocks.
pub fn split_into_blocks(text: &str) -> Vec<String> {
    let classifier = MarkupLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in text.lines() {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    if builder.inside_unit() {
        debug!("Document ended inside an unterminated unit");
    }

    builder.finish()
}
