use chrono::{DateTime, Utc};
use tracing::debug;

use super::blocks::{
    IMAGE_PLACEHOLDER, standalone_tool_result_block, thinking_block, tool_result_block,
    tool_use_block,
};
use super::timestamps::{format_date, format_long, format_naive_date};
use crate::models::{
    ContentPart, Record, RecordType, RenderMode, RenderOptions, RenderedDocument, Speaker,
    TurnCounts,
};
use crate::parsers::{ParsedLog, parse_records};

/// Marker between turns (and between the header, turns, and footer).
/// Search splits documents on exactly this string.
pub const TURN_SEPARATOR: &str = "\n---\n\n";
pub const DEFAULT_DISPLAY_NAME: &str = "conversation";
pub const CLEAN_MODE_NOTE: &str =
    "*Clean mode: tool calls, tool results, and thinking blocks were filtered out.*";

/// Render raw log lines, stamping the header with today's date
pub fn render<I, S>(lines: I, mode: RenderMode) -> RenderedDocument
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    render_with(lines, &RenderOptions::new(mode))
}

/// Render raw log lines with explicit options
pub fn render_with<I, S>(lines: I, options: &RenderOptions) -> RenderedDocument
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    render_log(&parse_records(lines), options)
}

/// Render already-parsed records
pub fn render_log(log: &ParsedLog, options: &RenderOptions) -> RenderedDocument {
    let header = scan_header(&log.records);
    let mode = options.mode;

    let mut text = String::new();
    write_header(&mut text, &header, options);

    let mut counts = TurnCounts::default();
    for record in &log.records {
        match record.record_type {
            RecordType::User => {
                if let Some(turn) = build_user_turn(record, mode) {
                    turn.commit(&mut text, &mut counts);
                }
            }
            RecordType::Assistant => {
                if let Some(turn) = build_assistant_turn(record, mode) {
                    turn.commit(&mut text, &mut counts);
                }
            }
            RecordType::ToolResult => {
                if mode.is_full() {
                    text.push_str(&standalone_tool_result_block(
                        record.tool_name(),
                        record.tool_payload(),
                    ));
                    text.push('\n');
                    text.push_str(TURN_SEPARATOR);
                }
            }
            RecordType::Other => {}
        }
    }

    write_footer(&mut text, &counts, mode);

    debug!(
        mode = %mode,
        user_turns = counts.user_turns,
        assistant_turns = counts.assistant_turns,
        skipped_lines = log.skipped,
        "rendered conversation"
    );

    RenderedDocument {
        text,
        mode,
        display_name: header.display_name,
        session_start: header.session_start,
        counts,
        skipped_lines: log.skipped,
    }
}

struct Header {
    display_name: String,
    session_start: Option<DateTime<Utc>>,
}

/// First timestamp and first `cwd` across all records, in input order
fn scan_header(records: &[Record]) -> Header {
    let session_start = records.iter().find_map(|r| r.timestamp);
    let display_name = records
        .iter()
        .find_map(|r| r.cwd().filter(|cwd| !cwd.trim().is_empty()))
        .and_then(last_path_segment)
        .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());

    Header { display_name, session_start }
}

fn last_path_segment(path: &str) -> Option<String> {
    path.trim()
        .trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

fn write_header(out: &mut String, header: &Header, options: &RenderOptions) {
    out.push_str(&format!("# Conversation: {}\n\n", header.display_name));
    if let Some(start) = &header.session_start {
        out.push_str(&format!("- **Session date:** {}\n", format_date(start)));
    }
    out.push_str(&format!("- **Extracted:** {}\n", format_naive_date(&options.extracted_on)));
    out.push_str(&format!("- **Mode:** {}\n", options.mode.label()));
    out.push_str(TURN_SEPARATOR);
}

fn write_footer(out: &mut String, counts: &TurnCounts, mode: RenderMode) {
    out.push_str("## Summary\n\n");
    out.push_str(&format!("- **User turns:** {}\n", counts.user_turns));
    out.push_str(&format!("- **Assistant turns:** {}\n", counts.assistant_turns));
    out.push_str(&format!("- **Total turns:** {}\n", counts.total_turns));
    if mode == RenderMode::Clean {
        out.push('\n');
        out.push_str(CLEAN_MODE_NOTE);
        out.push('\n');
    }
}

/// A candidate turn, built in isolation and only written to the document on commit.
#[derive(Debug)]
struct TurnBuffer {
    speaker: Speaker,
    stamp: Option<String>,
    blocks: Vec<String>,
}

impl TurnBuffer {
    fn new(speaker: Speaker, record: &Record, mode: RenderMode) -> Self {
        let stamp = if mode.is_full() { record.timestamp.as_ref().map(format_long) } else { None };
        Self { speaker, stamp, blocks: Vec::new() }
    }

    fn push(&mut self, block: String) {
        self.blocks.push(block);
    }

    fn commit(self, out: &mut String, counts: &mut TurnCounts) {
        out.push_str("## ");
        out.push_str(self.speaker.label());
        out.push('\n');
        if let Some(stamp) = &self.stamp {
            out.push_str(&format!("\n*{}*\n", stamp));
        }
        for block in &self.blocks {
            out.push('\n');
            out.push_str(block);
            out.push('\n');
        }
        out.push_str(TURN_SEPARATOR);
        counts.record(self.speaker);
    }
}

fn build_user_turn(record: &Record, mode: RenderMode) -> Option<TurnBuffer> {
    let parts = record.parts();
    // Tool-result-only and empty user records carry no dialogue
    if !mode.is_full() && !parts.iter().any(ContentPart::has_visible_text) {
        return None;
    }

    let mut turn = TurnBuffer::new(Speaker::User, record, mode);
    for part in parts {
        match part {
            ContentPart::Text { text } => turn.push(text.clone()),
            ContentPart::ToolResult { content } if mode.is_full() => {
                turn.push(tool_result_block(content))
            }
            ContentPart::Image => turn.push(IMAGE_PLACEHOLDER.to_string()),
            ContentPart::ToolResult { .. }
            | ContentPart::Thinking { .. }
            | ContentPart::ToolUse { .. }
            | ContentPart::Unknown => {}
        }
    }

    Some(turn)
}

fn build_assistant_turn(record: &Record, mode: RenderMode) -> Option<TurnBuffer> {
    let mut turn = TurnBuffer::new(Speaker::Assistant, record, mode);
    let mut saw_text = false;
    for part in record.parts() {
        match part {
            ContentPart::Text { text } => {
                saw_text = true;
                turn.push(text.clone());
            }
            ContentPart::Thinking { thinking } if mode.is_full() => {
                turn.push(thinking_block(thinking))
            }
            ContentPart::ToolUse { name, input } if mode.is_full() => {
                turn.push(tool_use_block(name, input))
            }
            ContentPart::Thinking { .. }
            | ContentPart::ToolUse { .. }
            | ContentPart::ToolResult { .. }
            | ContentPart::Image
            | ContentPart::Unknown => {}
        }
    }

    // Clean mode drops a record that never produced text (tool usage only)
    (mode.is_full() || saw_text).then_some(turn)
}
