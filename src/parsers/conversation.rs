use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::Record;
use crate::utils::safe_open_file;

/// Records parsed from a log, in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedLog {
    pub records: Vec<Record>,
    pub skipped: usize,
}

/// Parse a single log line. Returns `None` for anything that isn't a JSON object
/// of a recognizable shape; callers drop such lines silently.
pub fn parse_record(line: &str) -> Option<Record> {
    serde_json::from_str::<Record>(line.trim()).ok()
}

/// Parse every line independently, keeping input order and counting the drops
pub fn parse_records<I, S>(lines: I) -> ParsedLog
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut log = ParsedLog::default();

    for (line_num, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        match parse_record(line) {
            Some(record) => log.records.push(record),
            None => {
                debug!(line = line_num + 1, "skipping unparsable log line");
                log.skipped += 1;
            }
        }
    }

    log
}

/// Read a JSONL conversation log into its non-blank lines.
/// Invalid UTF-8 is replaced rather than rejected, so a damaged line is only skipped
/// by the parser instead of failing the whole read.
pub fn read_log_lines(path: &Path) -> Result<Vec<String>> {
    // Safely open file with TOCTOU protection and validation
    let file = safe_open_file(path)?;

    let reader = BufReader::new(file);
    let mut lines = Vec::new();

    for bytes in reader.split(b'\n') {
        let bytes = bytes
            .with_context(|| format!("Failed to read line from log file: {}", path.display()))?;
        let line = String::from_utf8_lossy(&bytes);
        let line = line.strip_suffix('\r').unwrap_or(&*line);

        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        lines.push(line.to_string());
    }

    Ok(lines)
}
