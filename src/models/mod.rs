//! Data models for conversation logs and rendered documents.
//!
//! - [`Record`] - One parsed line of a conversation log
//! - [`ContentPart`] - Typed fragment of a record's message payload
//! - [`RenderedDocument`] - Markdown output plus turn counts
//! - [`DocumentTurn`] / [`SearchHit`] - Turns recovered from a rendered document
//!
//! Records use serde with lenient deserializers (timestamps, content) from the
//! `parsers::deserializers` module so that unexpected shapes degrade instead of failing.

pub mod document;
pub mod record;
pub mod search;

pub use document::{RenderMode, RenderOptions, RenderedDocument, Speaker, TurnCounts};
pub use record::{ContentPart, Message, Record, RecordType};
pub use search::{DocumentTurn, SearchHit};
