//! Core types and configuration for the Sift retrieval engine.
//!
//! This crate holds the value types shared between the engine and its
//! callers. Keeping them separate ensures:
//!
//! - **Small result types**: every query returns plain owned data
//! - **Cross-crate compatibility**: the engine and the CLI share the same types
//! - **Clean boundaries**: no dependency on the engine internals

#![warn(missing_docs)]

use core::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Unique document identifier.
///
/// Documents are numbered in ingestion order starting at zero, so comparing
/// two ids also compares their ingestion order.
pub type DocId = u32;

/// Maximum flattened document text length in bytes (u32 span limit).
pub const MAX_DOCUMENT_LENGTH: usize = u32::MAX as usize;

/// Exact substring matching strategy.
///
/// Both strategies return identical occurrence counts for every input; they
/// differ only in how the text is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatcherKind {
    /// Right-to-left window comparison with a last-occurrence shift table.
    #[default]
    BadCharacter,
    /// Left-to-right scan driven by the pattern's failure function.
    FailureFunction,
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatcherKind::BadCharacter => f.write_str("bad-character"),
            MatcherKind::FailureFunction => f.write_str("failure-function"),
        }
    }
}

/// Search configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Largest edit distance a spelling suggestion may have.
    /// Default: 2
    pub max_edit_distance: usize,
    /// Number of suggestions returned for a misspelled word.
    /// Default: 5
    pub suggestion_limit: usize,
    /// Matcher used for page ranking and frequency counting.
    pub ranking_matcher: MatcherKind,
    /// Matcher used to count occurrences for tracked searches.
    pub tracking_matcher: MatcherKind,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_edit_distance: 2,
            suggestion_limit: 5,
            ranking_matcher: MatcherKind::BadCharacter,
            tracking_matcher: MatcherKind::FailureFunction,
        }
    }
}

impl SearchConfig {
    /// Creates a configuration that only suggests single-edit corrections.
    pub const fn strict() -> Self {
        Self {
            max_edit_distance: 1,
            suggestion_limit: 5,
            ranking_matcher: MatcherKind::BadCharacter,
            tracking_matcher: MatcherKind::FailureFunction,
        }
    }

    /// Creates a configuration for noisy input: wider distance, more suggestions.
    pub const fn lenient() -> Self {
        Self {
            max_edit_distance: 3,
            suggestion_limit: 10,
            ranking_matcher: MatcherKind::BadCharacter,
            tracking_matcher: MatcherKind::FailureFunction,
        }
    }
}

/// A vocabulary token proposed as a correction, with its edit distance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Suggestion {
    /// The suggested vocabulary token.
    pub token: String,
    /// Levenshtein distance between the query and `token`.
    pub distance: usize,
}

impl Suggestion {
    /// Creates a new suggestion.
    pub fn new(token: impl Into<String>, distance: usize) -> Self {
        Self {
            token: token.into(),
            distance,
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (distance {})", self.token, self.distance)
    }
}

/// Outcome of a spell check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellCheck {
    /// The normalized word that was checked.
    pub word: String,
    /// Whether the word is in the vocabulary.
    pub found: bool,
    /// Closest vocabulary tokens; always empty when `found` is true.
    pub suggestions: Vec<Suggestion>,
}

/// Words sharing a prefix, possibly truncated to a display limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completions {
    /// The first completions in lexicographic order.
    pub words: Vec<String>,
    /// Number of stored words sharing the prefix before truncation.
    pub total: usize,
}

impl Completions {
    /// Number of completions left out by the limit.
    pub fn remaining(&self) -> usize {
        self.total - self.words.len()
    }
}

/// Documents containing a token, with whole-token counts per document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenHits {
    /// The normalized token that was looked up.
    pub token: String,
    /// `(document, occurrences)` pairs sorted by document id.
    pub per_document: Vec<(DocId, usize)>,
}

impl TokenHits {
    /// Creates an empty result for `token`.
    pub fn empty(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            per_document: Vec::new(),
        }
    }

    /// Returns the posting set in ascending id order.
    pub fn documents(&self) -> impl Iterator<Item = DocId> + '_ {
        self.per_document.iter().map(|&(doc_id, _)| doc_id)
    }

    /// Whole-token occurrences of the token in `doc_id` (0 when absent).
    pub fn count(&self, doc_id: DocId) -> usize {
        self.per_document
            .binary_search_by_key(&doc_id, |&(d, _)| d)
            .map(|i| self.per_document[i].1)
            .unwrap_or(0)
    }

    /// Total whole-token occurrences across all documents.
    pub fn total(&self) -> usize {
        self.per_document.iter().map(|&(_, n)| n).sum()
    }

    /// Returns `true` if no document contains the token.
    pub fn is_empty(&self) -> bool {
        self.per_document.is_empty()
    }
}

/// Ranking result for one document.
///
/// `score` is the sum of the substring occurrence counts in
/// `keyword_counts`, which keeps the keywords in query order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageScore {
    /// Document identifier
    pub doc_id: DocId,
    /// Total occurrences of all keywords
    pub score: usize,
    /// Per-keyword occurrence counts
    pub keyword_counts: Vec<(String, usize)>,
}

impl PageScore {
    /// Creates a score with no keyword breakdown yet.
    pub const fn new(doc_id: DocId) -> Self {
        Self {
            doc_id,
            score: 0,
            keyword_counts: Vec::new(),
        }
    }

    /// Occurrences recorded for `keyword` (0 when it was not part of the query).
    pub fn count(&self, keyword: &str) -> usize {
        self.keyword_counts
            .iter()
            .find(|(k, _)| k == keyword)
            .map_or(0, |&(_, n)| n)
    }
}

impl fmt::Display for PageScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc={} score={}", self.doc_id, self.score)
    }
}

/// One tracked search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRecord {
    /// The normalized query token.
    pub token: String,
    /// When the search was recorded.
    pub timestamp: DateTime<Utc>,
    /// Corpus-wide occurrences of the token at search time.
    pub occurrences: usize,
}

/// Errors that can occur when adding a document to the index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// Another document with the same name was already ingested.
    #[error("duplicate document name: {name}")]
    DuplicateName {
        /// The offending name.
        name: String,
    },
    /// Document text exceeds the maximum allowed size.
    #[error("document too large: {size} bytes (max: {max_size} bytes)")]
    TooLarge {
        /// The actual size of the document in bytes.
        size: usize,
        /// The maximum allowed size in bytes.
        max_size: usize,
    },
    /// Document text contains invalid control characters.
    #[error("document contains invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid content.
        reason: &'static str,
    },
}

/// Summary of a batch ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Documents that were indexed.
    pub added: usize,
    /// Documents that were rejected and skipped.
    pub failed: usize,
    /// The last rejection, if any.
    pub last_error: Option<DocumentError>,
}
