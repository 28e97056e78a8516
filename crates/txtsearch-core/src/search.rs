//! Search orchestration for txtsearch.
//!
//! A search lists the input directory once, builds a single [`LineMatcher`],
//! and scans every listed file in order. Matches are collected in encounter
//! order, which is the lister's sorted order.
//!
//! The first error from listing or scanning aborts the whole search; matches
//! found before the failure are discarded.

use crate::error::Result;
use crate::lister::list_files;
use crate::matcher::LineMatcher;
use crate::types::{SearchRequest, SearchResult};
use std::time::Instant;
use tracing::{debug, info};

/// Run `request` and return the files containing any of its words.
///
/// # Example
/// ```no_run
/// use txtsearch_core::{search, SearchRequest};
///
/// let request = SearchRequest::new("notes", vec!["todo".to_string()], false)?;
/// let result = search(&request)?;
/// println!("total: {}  match: {}", result.total_count, result.match_count());
/// # Ok::<(), txtsearch_core::TxtSearchError>(())
/// ```
pub fn search(request: &SearchRequest) -> Result<SearchResult> {
    let start = Instant::now();

    let files = list_files(&request.input_dir)?;
    let matcher = LineMatcher::new(&request.words, request.case_sensitive)?;

    let mut matched_paths = Vec::new();
    for path in &files {
        let matched = matcher.matches_file(path)?;
        debug!(path = %path.display(), matched, "Scanned file");

        if matched {
            matched_paths.push(path.clone());
        }
    }

    let result = SearchResult {
        total_count: files.len(),
        matched_paths,
    };

    info!(
        dir = %request.input_dir.display(),
        total = result.total_count,
        matched = result.match_count(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Search complete"
    );

    Ok(result)
}
