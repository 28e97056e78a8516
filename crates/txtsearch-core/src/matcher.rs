//! Line-by-line substring matching for a single file.
//!
//! All target words are compiled into one Aho-Corasick automaton, so each
//! line is scanned once regardless of how many words were given.
//!
//! ## Case handling
//!
//! In case-insensitive mode the words are lowercased once, when the matcher
//! is built, and every line is lowercased before it is tested. Lowercasing
//! is per character, without context-dependent rules such as final sigma.
//! The caller's word list is only borrowed; the lowercase copies belong to
//! the matcher.
//!
//! ## Lines
//!
//! Lines are split on `\n` and read into a growable buffer, so there is no
//! maximum line length. A final line without a trailing newline is still
//! tested, and an empty file counts as one empty line.

use crate::error::{Result, TxtSearchError};
use aho_corasick::AhoCorasick;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::trace;

/// Tests whether any target word occurs in any line of a file.
#[derive(Debug, Clone)]
pub struct LineMatcher {
    /// Automaton over the (possibly lowercased) words
    automaton: AhoCorasick,

    /// Whether lines are tested as-is
    case_sensitive: bool,
}

impl LineMatcher {
    /// Build a matcher for `words`.
    ///
    /// # Example
    /// ```
    /// use txtsearch_core::LineMatcher;
    /// let words = vec!["Needle".to_string()];
    /// let matcher = LineMatcher::new(&words, false).unwrap();
    /// assert!(matcher.matches_line(b"a needle in a haystack"));
    /// assert_eq!(words[0], "Needle");
    /// ```
    pub fn new<S: AsRef<str>>(words: &[S], case_sensitive: bool) -> Result<Self> {
        if words.is_empty() {
            return Err(TxtSearchError::EmptyWords);
        }

        let patterns: Vec<String> = if case_sensitive {
            words.iter().map(|w| w.as_ref().to_string()).collect()
        } else {
            words.iter().map(|w| lowercase(w.as_ref())).collect()
        };

        let automaton =
            AhoCorasick::new(&patterns).map_err(|e| TxtSearchError::InvalidPattern {
                reason: e.to_string(),
            })?;

        Ok(LineMatcher {
            automaton,
            case_sensitive,
        })
    }

    /// Check a single line (without its newline) for any target word.
    pub fn matches_line(&self, line: &[u8]) -> bool {
        if self.case_sensitive {
            self.automaton.is_match(line)
        } else {
            let lowered = lowercase(&String::from_utf8_lossy(line));
            self.automaton.is_match(lowered.as_bytes())
        }
    }

    /// Scan the file at `path`, stopping at the first matching line.
    ///
    /// Returns `Ok(false)` once the whole file has been read without a match.
    /// An empty file is tested as a single empty line.
    pub fn matches_file(&self, path: &Path) -> Result<bool> {
        let file = File::open(path).map_err(|e| TxtSearchError::file_read(path, e))?;
        let mut reader = BufReader::new(file);
        let mut line = Vec::new();
        let mut line_number = 0usize;

        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .map_err(|e| TxtSearchError::file_read(path, e))?;
            if read == 0 {
                return Ok(line_number == 0 && self.matches_line(&line));
            }
            line_number += 1;

            if line.last() == Some(&b'\n') {
                line.pop();
            }

            if self.matches_line(&line) {
                trace!(path = %path.display(), line = line_number, "Matched line");
                return Ok(true);
            }
        }
    }
}

/// Lowercase one character at a time, so a word and a line containing it
/// are normalized identically regardless of surrounding context.
fn lowercase(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}
