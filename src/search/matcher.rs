use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::turns::split_turns;
use crate::models::{DocumentTurn, SearchHit};
use crate::utils::safe_open_file;

const DOCUMENT_EXTENSION: &str = "md";

/// Keyword query over rendered turns
///
/// Matching is case-insensitive; every term must occur in the turn body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<String>,
    pub context: usize,
}

impl SearchQuery {
    pub fn new(query: &str, context: usize) -> Self {
        let terms = query.split_whitespace().map(str::to_lowercase).collect();
        Self { terms, context }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn matches(&self, turn: &DocumentTurn) -> bool {
        if self.terms.is_empty() {
            return false;
        }
        let body = turn.body.to_lowercase();
        self.terms.iter().all(|term| body.contains(term.as_str()))
    }
}

/// Search one rendered document, returning hits with surrounding turns
pub fn search_document(document: &str, query: &SearchQuery) -> Vec<SearchHit> {
    if query.is_empty() {
        return Vec::new();
    }

    let turns = split_turns(document);
    turns
        .iter()
        .enumerate()
        .filter(|(_, turn)| query.matches(turn))
        .map(|(i, turn)| {
            let start = i.saturating_sub(query.context);
            let end = (i + 1 + query.context).min(turns.len());
            SearchHit {
                path: None,
                turn: turn.clone(),
                before: turns[start..i].to_vec(),
                after: turns[i + 1..end].to_vec(),
            }
        })
        .collect()
}

/// Search every rendered document under `paths`
///
/// Directories are walked recursively for `.md` files. Files are searched in parallel;
/// hits come back ordered by path, then by turn. Unreadable files are logged and skipped.
pub fn search_paths(paths: &[PathBuf], query: &SearchQuery) -> Result<Vec<SearchHit>> {
    let mut files = collect_documents(paths)?;
    files.sort();
    files.dedup();

    debug!(files = files.len(), "searching rendered documents");

    let per_file: Vec<Vec<SearchHit>> = files
        .par_iter()
        .map(|path| match read_document(path) {
            Ok(text) => search_document(&text, query)
                .into_iter()
                .map(|hit| SearchHit { path: Some(path.clone()), ..hit })
                .collect(),
            Err(e) => {
                warn!("Skipping {}: {:#}", path.display(), e);
                Vec::new()
            }
        })
        .collect();

    Ok(per_file.into_iter().flatten().collect())
}

fn collect_documents(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for root in paths {
        if !root.exists() {
            bail!("Search path does not exist: {}", root.display());
        }
        if root.is_file() {
            files.push(root.clone());
            continue;
        }
        for entry in WalkDir::new(root).follow_links(false) {
            match entry {
                Ok(entry) if entry.file_type().is_file() && is_document(entry.path()) => {
                    files.push(entry.into_path());
                }
                Ok(_) => {}
                Err(e) => warn!("Failed to walk {}: {}", root.display(), e),
            }
        }
    }
    Ok(files)
}

fn is_document(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(DOCUMENT_EXTENSION)
}

fn read_document(path: &Path) -> Result<String> {
    let mut file = safe_open_file(path)?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .with_context(|| format!("Failed to read document: {}", path.display()))?;
    Ok(text)
}
