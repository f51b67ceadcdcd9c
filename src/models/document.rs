use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which rendering to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Every part kind, with timestamps
    #[default]
    Full,
    /// Dialogue text only
    Clean,
}

impl RenderMode {
    pub fn is_full(self) -> bool {
        self == RenderMode::Full
    }

    pub fn label(self) -> &'static str {
        match self {
            RenderMode::Full => "Full",
            RenderMode::Clean => "Clean",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Full => f.write_str("full"),
            RenderMode::Clean => f.write_str("clean"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    pub fn label(self) -> &'static str {
        match self {
            Speaker::User => "User",
            Speaker::Assistant => "Assistant",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnCounts {
    pub user_turns: usize,
    pub assistant_turns: usize,
    pub total_turns: usize,
}

impl TurnCounts {
    pub fn record(&mut self, speaker: Speaker) {
        match speaker {
            Speaker::User => self.user_turns += 1,
            Speaker::Assistant => self.assistant_turns += 1,
        }
        self.total_turns += 1;
    }
}

/// Inputs that shape a render besides the log lines themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub mode: RenderMode,
    pub extracted_on: NaiveDate,
}

impl RenderOptions {
    /// Options for `mode`, stamped with today's date
    pub fn new(mode: RenderMode) -> Self {
        Self { mode, extracted_on: Utc::now().date_naive() }
    }
}

/// A finished document plus the summary the caller reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    #[serde(skip)]
    pub text: String,
    pub mode: RenderMode,
    pub display_name: String,
    pub session_start: Option<DateTime<Utc>>,
    pub counts: TurnCounts,
    pub skipped_lines: usize,
}
