//! JSONL parsing for conversation logs
//!
//! # Error Handling Strategy
//!
//! Parsing is **best-effort** throughout:
//!
//! - **Individual line failures**: A line that isn't a JSON object of a known shape is
//!   skipped and counted; it never produces a partial record and never fails the parse.
//!
//! - **Individual part failures**: A malformed content part inside an otherwise valid
//!   record is dropped on its own, keeping the rest of the record.
//!
//! - **Optional fields**: Missing or invalid timestamps, content, and `cwd` are treated as
//!   absent.
//!
//! Only file I/O (opening, size validation, reading) can fail, via `anyhow::Result`.

pub mod conversation;
pub mod deserializers;

pub use conversation::{ParsedLog, parse_record, parse_records, read_log_lines};
