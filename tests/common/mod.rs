//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use claude_transcript::models::{RenderMode, RenderOptions};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Fixed extraction date so documents compare byte-for-byte
pub fn options(mode: RenderMode) -> RenderOptions {
    RenderOptions { mode, extracted_on: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap() }
}

/// Builder for one JSONL log record
pub struct RecordBuilder {
    record_type: String,
    timestamp: Option<String>,
    cwd: Option<String>,
    parts: Vec<Value>,
}

impl RecordBuilder {
    pub fn user() -> Self {
        Self::with_type("user")
    }

    pub fn assistant() -> Self {
        Self::with_type("assistant")
    }

    fn with_type(record_type: &str) -> Self {
        Self { record_type: record_type.to_string(), timestamp: None, cwd: None, parts: Vec::new() }
    }

    /// Set the ISO-8601 timestamp
    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(timestamp.to_string());
        self
    }

    /// Set the working directory
    pub fn cwd(mut self, cwd: &str) -> Self {
        self.cwd = Some(cwd.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.parts.push(json!({"type": "text", "text": text}));
        self
    }

    pub fn thinking(mut self, thinking: &str) -> Self {
        self.parts.push(json!({"type": "thinking", "thinking": thinking, "signature": "sig"}));
        self
    }

    pub fn tool_use(mut self, name: &str, input: Value) -> Self {
        self.parts
            .push(json!({"type": "tool_use", "id": "toolu_01", "name": name, "input": input}));
        self
    }

    pub fn tool_result(mut self, content: Value) -> Self {
        self.parts
            .push(json!({"type": "tool_result", "tool_use_id": "toolu_01", "content": content}));
        self
    }

    pub fn image(mut self) -> Self {
        self.parts.push(json!({"type": "image", "source": {"type": "base64", "data": "AAAA"}}));
        self
    }

    /// Convert to a JSONL line
    pub fn to_json(&self) -> String {
        let mut record = json!({
            "type": self.record_type,
            "message": {"role": self.record_type, "content": self.parts},
        });
        if let Some(ts) = &self.timestamp {
            record["timestamp"] = json!(ts);
        }
        if let Some(cwd) = &self.cwd {
            record["cwd"] = json!(cwd);
        }
        record.to_string()
    }
}

/// Standalone tool-result record line
pub fn tool_result_record(name: &str, result: &str) -> String {
    json!({"type": "tool-result", "toolName": name, "result": result}).to_string()
}

/// Write `lines` as a JSONL file inside `dir`
pub fn write_log(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, lines.join("\n")).expect("Failed to write log file");
    path
}

/// A short user/assistant exchange with tool usage in between
pub fn sample_conversation() -> Vec<String> {
    vec![
        RecordBuilder::user()
            .timestamp("2024-01-15T10:30:00Z")
            .cwd("/home/alice/webapp")
            .text("Why does the login test fail?")
            .to_json(),
        RecordBuilder::assistant()
            .timestamp("2024-01-15T10:30:05Z")
            .thinking("Check the test file first")
            .tool_use("Read", json!({"file_path": "tests/login.rs"}))
            .to_json(),
        RecordBuilder::user()
            .timestamp("2024-01-15T10:30:06Z")
            .tool_result(json!("assert_eq!(status, 200)"))
            .to_json(),
        RecordBuilder::assistant()
            .timestamp("2024-01-15T10:30:10Z")
            .text("The session cookie is missing from the request.")
            .to_json(),
    ]
}

pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}
