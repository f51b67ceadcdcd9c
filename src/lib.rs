//! Claude Transcript - Render Claude conversation logs as Markdown
//!
//! This library turns line-delimited JSON conversation logs into readable documents.
//! It supports:
//!
//! - Best-effort parsing of user, assistant, and tool-result records
//! - A **full** rendering with timestamps, tool calls, tool results, and thinking blocks
//! - A **clean** rendering that keeps only the dialogue text
//! - Keyword search over rendered documents, turn by turn
//!
//! # Example
//!
//! ```
//! use claude_transcript::models::RenderMode;
//! use claude_transcript::render;
//!
//! let lines = [
//!     r#"{"type":"user","message":{"content":[{"type":"text","text":"Hello"}]}}"#,
//!     r#"{"type":"assistant","message":{"content":[{"type":"text","text":"Hi there"}]}}"#,
//! ];
//! let document = render(lines, RenderMode::Clean);
//! assert_eq!(document.counts.total_turns, 2);
//! ```

pub mod cli;
pub mod models;
pub mod parsers;
pub mod render;
pub mod search;
pub mod utils;

// Re-export commonly used types
pub use models::{RenderMode, RenderedDocument, TurnCounts};
pub use parsers::{parse_records, read_log_lines};
pub use render::{TURN_SEPARATOR, render, render_with};
pub use search::{SearchQuery, search_document, search_paths};
