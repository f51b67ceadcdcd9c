use crate::models::{DocumentTurn, Speaker};
use crate::render::TURN_SEPARATOR;

/// Split a rendered document back into its turns.
///
/// Chunks between separators that don't open with a `## User` or `## Assistant`
/// heading (header, footer, standalone tool results) are dropped.
pub fn split_turns(document: &str) -> Vec<DocumentTurn> {
    document
        .split(TURN_SEPARATOR)
        .filter_map(parse_turn_chunk)
        .enumerate()
        .map(|(index, (speaker, body))| DocumentTurn { index, speaker, body })
        .collect()
}

fn parse_turn_chunk(chunk: &str) -> Option<(Speaker, String)> {
    let (heading, body) = chunk.split_once('\n').unwrap_or((chunk, ""));
    let speaker = match heading.trim_end() {
        "## User" => Speaker::User,
        "## Assistant" => Speaker::Assistant,
        _ => return None,
    };
    Some((speaker, body.trim().to_string()))
}
