//! Keyword search over rendered documents.
//!
//! Documents are split back into turns on the renderer's turn separator, so a
//! payload that contains the separator literally splits its turn in two.

pub mod matcher;
pub mod turns;

pub use matcher::{SearchQuery, search_document, search_paths};
pub use turns::split_turns;
