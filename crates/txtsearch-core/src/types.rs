//! Core data types for txtsearch.
//!
//! A search is a single read-only pass: a [`SearchRequest`] goes in, a fresh
//! [`SearchResult`] comes out, and neither is mutated afterwards.

use crate::error::{Result, TxtSearchError};
use std::path::{Path, PathBuf};

/// What to search for and where.
///
/// The word list is never modified by the search; case normalization is
/// applied to a private copy inside the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Directory whose files are scanned (not recursively)
    pub input_dir: PathBuf,

    /// Target words, in the order given by the caller
    pub words: Vec<String>,

    /// Match case exactly instead of lowercasing both sides
    pub case_sensitive: bool,
}

impl SearchRequest {
    /// Create a new request, rejecting an empty word list.
    pub fn new(
        input_dir: impl Into<PathBuf>,
        words: Vec<String>,
        case_sensitive: bool,
    ) -> Result<Self> {
        if words.is_empty() {
            return Err(TxtSearchError::EmptyWords);
        }

        Ok(SearchRequest {
            input_dir: input_dir.into(),
            words,
            case_sensitive,
        })
    }
}

/// Outcome of a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Number of files examined
    pub total_count: usize,

    /// Files containing at least one target word, in ascending path order
    pub matched_paths: Vec<PathBuf>,
}

impl SearchResult {
    /// Number of matched files
    pub fn match_count(&self) -> usize {
        self.matched_paths.len()
    }

    /// Iterate over matched paths in order
    pub fn matches(&self) -> impl Iterator<Item = &Path> {
        self.matched_paths.iter().map(PathBuf::as_path)
    }
}
