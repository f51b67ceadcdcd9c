use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Speaker;

/// One turn recovered from a rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTurn {
    pub index: usize,
    pub speaker: Speaker,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub path: Option<PathBuf>,
    pub turn: DocumentTurn,
    pub before: Vec<DocumentTurn>,
    pub after: Vec<DocumentTurn>,
}
