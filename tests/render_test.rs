/// Rendering behavior tests: turn order, mode filtering, rollback, and tolerance
mod common;

use claude_transcript::models::RenderMode;
use claude_transcript::render::blocks::TRUNCATION_MARKER;
use claude_transcript::render_with;
use claude_transcript::search::split_turns;
use common::{RecordBuilder, options, sample_conversation, tool_result_record};
use serde_json::json;

#[test]
fn test_hello_scenario_full_mode() {
    let lines = vec![
        RecordBuilder::user().timestamp("2024-01-15T10:30:00Z").text("Hello").to_json(),
        RecordBuilder::assistant().timestamp("2024-01-15T10:31:00Z").text("Hi there").to_json(),
    ];

    let doc = render_with(&lines, &options(RenderMode::Full));

    assert_eq!(doc.counts.user_turns, 1);
    assert_eq!(doc.counts.assistant_turns, 1);
    assert_eq!(doc.counts.total_turns, 2);

    let user = doc.text.find("## User\n\n*January 15, 2024, 10:30*\n\nHello\n").unwrap();
    let assistant =
        doc.text.find("## Assistant\n\n*January 15, 2024, 10:31*\n\nHi there\n").unwrap();
    assert!(user < assistant);
}

#[test]
fn test_hello_scenario_clean_mode() {
    let lines = vec![
        RecordBuilder::user().timestamp("2024-01-15T10:30:00Z").text("Hello").to_json(),
        RecordBuilder::assistant().timestamp("2024-01-15T10:31:00Z").text("Hi there").to_json(),
    ];

    let doc = render_with(&lines, &options(RenderMode::Clean));

    assert_eq!(doc.counts.user_turns, 1);
    assert_eq!(doc.counts.assistant_turns, 1);
    assert_eq!(doc.counts.total_turns, 2);
    assert!(doc.text.contains("## User\n\nHello\n"));
    assert!(doc.text.contains("## Assistant\n\nHi there\n"));
    assert!(!doc.text.contains("10:30"));
    assert!(!doc.text.contains("10:31"));
}

#[test]
fn test_tool_use_only_scenario() {
    let lines = vec![
        RecordBuilder::assistant()
            .tool_use("Bash", json!({"command": "cargo fmt", "description": "Format code"}))
            .to_json(),
    ];

    let full = render_with(&lines, &options(RenderMode::Full));
    assert_eq!(full.counts.assistant_turns, 1);
    assert!(full.text.contains("## Assistant\n"));
    assert!(full.text.contains("**Tool Use:** `Bash`"));
    assert!(full.text.contains("*Format code*"));
    assert!(full.text.contains("\"command\": \"cargo fmt\""));

    let clean = render_with(&lines, &options(RenderMode::Clean));
    assert_eq!(clean.counts.assistant_turns, 0);
    assert_eq!(clean.counts.total_turns, 0);
    assert!(split_turns(&clean.text).is_empty());
}

#[test]
fn test_rollback_leaves_document_byte_identical() {
    let tool_only = RecordBuilder::assistant()
        .timestamp("2024-01-15T10:30:05Z")
        .thinking("hidden")
        .tool_use("Grep", json!({"pattern": "todo"}))
        .to_json();

    let base = sample_conversation();
    for position in 0..=base.len() {
        let mut with = base.clone();
        with.insert(position, tool_only.clone());

        let with_doc = render_with(&with, &options(RenderMode::Clean));
        let without_doc = render_with(&base, &options(RenderMode::Clean));

        assert_eq!(with_doc.text, without_doc.text, "inserted at {}", position);
        assert_eq!(with_doc.counts, without_doc.counts);
    }
}

#[test]
fn test_turn_order_matches_record_order() {
    let lines: Vec<String> = (0..10)
        .map(|i| {
            let builder =
                if i % 2 == 0 { RecordBuilder::user() } else { RecordBuilder::assistant() };
            builder.text(&format!("message number {}", i)).to_json()
        })
        .collect();

    for mode in [RenderMode::Full, RenderMode::Clean] {
        let doc = render_with(&lines, &options(mode));
        let turns = split_turns(&doc.text);
        assert_eq!(turns.len(), 10);
        for (i, turn) in turns.iter().enumerate() {
            assert_eq!(turn.body, format!("message number {}", i));
        }
    }
}

#[test]
fn test_clean_never_has_more_turns_than_full() {
    let mut lines = sample_conversation();
    lines.push(RecordBuilder::user().image().to_json());
    lines.push(RecordBuilder::user().text("   ").to_json());
    lines.push(RecordBuilder::assistant().thinking("only thinking").to_json());
    lines.push(tool_result_record("Bash", "ok"));

    let full = render_with(&lines, &options(RenderMode::Full));
    let clean = render_with(&lines, &options(RenderMode::Clean));

    assert!(clean.counts.total_turns <= full.counts.total_turns);
    assert!(clean.counts.user_turns <= full.counts.user_turns);
    assert!(clean.counts.assistant_turns <= full.counts.assistant_turns);
    assert_eq!(clean.counts.total_turns, 2);
}

#[test]
fn test_malformed_lines_do_not_change_output() {
    let base = sample_conversation();
    let expected = render_with(&base, &options(RenderMode::Full));

    for position in 0..=base.len() {
        let mut with = base.clone();
        with.insert(position, r#"{"type":"user","message":{"content":[{"type":"te"#.to_string());
        let doc = render_with(&with, &options(RenderMode::Full));
        assert_eq!(doc.text, expected.text);
        assert_eq!(doc.counts, expected.counts);
        assert_eq!(doc.skipped_lines, 1);
    }
}

#[test]
fn test_standalone_tool_result_truncated_at_1000_chars() {
    let payload = "x".repeat(1500);
    let lines = vec![tool_result_record("Bash", &payload)];

    let full = render_with(&lines, &options(RenderMode::Full));
    let expected = format!("```\n{}{}\n```", "x".repeat(1000), TRUNCATION_MARKER);
    assert!(full.text.contains("**Tool Result (`Bash`):**"));
    assert!(full.text.contains(&expected));
    assert!(!full.text.contains(&"x".repeat(1001)));
    assert_eq!(full.counts.total_turns, 0);

    let clean = render_with(&lines, &options(RenderMode::Clean));
    assert!(!clean.text.contains("Tool Result"));
}

#[test]
fn test_standalone_tool_result_under_cap_is_whole() {
    let payload = "y".repeat(1000);
    let doc = render_with([tool_result_record("Read", &payload)], &options(RenderMode::Full));
    assert!(doc.text.contains(&format!("```\n{}\n```", payload)));
    assert!(!doc.text.contains(TRUNCATION_MARKER));
}

#[test]
fn test_nested_tool_result_is_not_truncated() {
    let payload = "z".repeat(2000);
    let lines = vec![RecordBuilder::user().tool_result(json!(payload)).to_json()];
    let doc = render_with(&lines, &options(RenderMode::Full));
    assert!(doc.text.contains(&payload));
}

#[test]
fn test_structured_tool_result_is_pretty_printed() {
    let lines = vec![
        RecordBuilder::user()
            .tool_result(json!([{"type": "text", "text": "42 files"}]))
            .to_json(),
    ];
    let doc = render_with(&lines, &options(RenderMode::Full));
    assert!(doc.text.contains("\"text\": \"42 files\""));
}

#[test]
fn test_sample_conversation_full_and_clean() {
    let lines = sample_conversation();

    let full = render_with(&lines, &options(RenderMode::Full));
    assert_eq!(full.counts.user_turns, 2);
    assert_eq!(full.counts.assistant_turns, 2);
    assert!(full.text.starts_with("# Conversation: webapp\n"));
    assert!(full.text.contains("<summary>Thinking</summary>"));
    assert!(full.text.contains("assert_eq!(status, 200)"));

    let clean = render_with(&lines, &options(RenderMode::Clean));
    assert_eq!(clean.counts.user_turns, 1);
    assert_eq!(clean.counts.assistant_turns, 1);
    assert!(!clean.text.contains("Thinking"));
    assert!(!clean.text.contains("tests/login.rs"));
    assert!(clean.text.contains("- **Mode:** Clean\n"));
    assert!(clean.text.contains("The session cookie is missing from the request."));
}

#[test]
fn test_display_name_defaults_without_cwd() {
    let lines = vec![RecordBuilder::user().text("hi").to_json()];
    let doc = render_with(&lines, &options(RenderMode::Full));
    assert_eq!(doc.display_name, "conversation");
    assert!(doc.text.starts_with("# Conversation: conversation\n"));
}

#[test]
fn test_only_garbage_yields_minimal_document() {
    let doc = render_with(["not json", "{broken"], &options(RenderMode::Clean));
    assert_eq!(doc.counts.total_turns, 0);
    assert_eq!(doc.skipped_lines, 2);
    assert!(doc.text.contains("- **Total turns:** 0\n"));
}
