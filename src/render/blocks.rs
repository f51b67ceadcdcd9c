//! Markdown fragments for individual content parts.
//!
//! Every builder returns a block without trailing newlines; the turn buffer joins
//! blocks with blank lines.

use serde_json::Value;

pub const IMAGE_PLACEHOLDER: &str = "[Image]";
pub const TRUNCATION_MARKER: &str = "\n... [truncated]";
pub const MAX_TOOL_RESULT_CHARS: usize = 1000;

/// Text form of a structured payload: strings verbatim, everything else pretty-printed JSON
pub fn payload_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Cap `text` at `max_chars` characters, appending [`TRUNCATION_MARKER`] when cut
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            let mut out = String::with_capacity(byte_idx + TRUNCATION_MARKER.len());
            out.push_str(&text[..byte_idx]);
            out.push_str(TRUNCATION_MARKER);
            out
        }
        None => text.to_string(),
    }
}

/// Fenced code block whose fence outlasts any backtick run in the body
pub fn code_block(lang: &str, body: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in body.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    let fence = "`".repeat(longest.max(2) + 1);
    format!("{fence}{lang}\n{body}\n{fence}")
}

pub fn details(summary: &str, body: &str) -> String {
    format!("<details>\n<summary>{summary}</summary>\n\n{body}\n\n</details>")
}

pub fn thinking_block(thinking: &str) -> String {
    details("Thinking", thinking.trim())
}

pub fn tool_use_block(name: &str, input: &Value) -> String {
    let mut block = format!("**Tool Use:** `{}`", name);

    if let Some(description) = input.get("description").and_then(Value::as_str)
        && !description.trim().is_empty()
    {
        block.push_str("\n\n*");
        block.push_str(description.trim());
        block.push('*');
    }

    if !input.is_null() {
        block.push_str("\n\n");
        block.push_str(&details("Input", &code_block("json", &payload_text(input))));
    }

    block
}

/// Result nested in a user record; the payload is kept whole
pub fn tool_result_block(content: &Value) -> String {
    format!("**Tool Result:**\n\n{}", code_block("", &payload_text(content)))
}

/// Standalone `tool-result` record; the payload is capped at [`MAX_TOOL_RESULT_CHARS`]
pub fn standalone_tool_result_block(name: Option<&str>, result: Option<&Value>) -> String {
    let name = name.filter(|n| !n.trim().is_empty()).unwrap_or("unknown");
    let payload = result.map(payload_text).unwrap_or_default();
    format!(
        "**Tool Result (`{}`):**\n\n{}",
        name,
        code_block("", &truncate_chars(&payload, MAX_TOOL_RESULT_CHARS))
    )
}
