//! Document store: names and flattened text.
//!
//! The corpus is the raw-text side of ingestion. Substring work (ranking,
//! frequency counts, tracked searches) scans the text kept here, while the
//! token side lives in the [`InvertedIndex`](crate::InvertedIndex).

use rustc_hash::FxHashMap;
use sift_types::{DocId, DocumentError, MatcherKind, MAX_DOCUMENT_LENGTH};

use crate::analyzer::{normalize_query, Tokenizer};
use crate::arena::Arena;
use crate::matcher::Pattern;

/// A document ready for ingestion.
///
/// `text` is the flattened lowercase text used for substring matching and
/// `tokens` the cleaned tokens used for the vocabulary and inverted index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Unique, caller-chosen name (for example a file name)
    pub name: String,
    /// Flattened lowercase text
    pub text: String,
    /// Cleaned lowercase tokens in document order
    pub tokens: Vec<String>,
}

impl Document {
    /// Creates a document from already prepared parts.
    pub fn new(name: impl Into<String>, text: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            tokens,
        }
    }

    /// Creates a document whose text is its tokens joined by single spaces.
    pub fn from_tokens<I, S>(name: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        Self {
            name: name.into(),
            text: tokens.join(" "),
            tokens,
        }
    }

    /// Runs the reference analyzer over raw text.
    ///
    /// The text is kept lower-cased verbatim; tokens come from the default
    /// [`Tokenizer`].
    pub fn analyze(name: impl Into<String>, raw: &str) -> Self {
        Self::analyze_with(name, raw, &Tokenizer::default())
    }

    /// Runs a specific tokenizer over raw text.
    pub fn analyze_with(name: impl Into<String>, raw: &str, tokenizer: &Tokenizer) -> Self {
        Self {
            name: name.into(),
            text: raw.to_lowercase(),
            tokens: tokenizer.analyze(raw),
        }
    }
}

/// Checks if input contains invalid control characters (other than whitespace).
fn contains_invalid_controls(input: &str) -> bool {
    input
        .bytes()
        .any(|b| matches!(b, 0x00..=0x08 | 0x0E..=0x1F | 0x7F))
}

/// Names and text of every ingested document, addressed by [`DocId`].
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    texts: Arena,
    names: Vec<String>,
    by_name: FxHashMap<String, DocId>,
}

impl Corpus {
    /// Creates an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no document has been added.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Total bytes of stored text.
    #[inline(always)]
    pub fn text_bytes(&self) -> usize {
        self.texts.bytes()
    }

    /// Removes every document.
    pub fn clear(&mut self) {
        self.texts.clear();
        self.names.clear();
        self.by_name.clear();
    }

    /// Checks that a document could be added, without adding it.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::DuplicateName` if the name is taken.
    /// Returns `DocumentError::TooLarge` if the text cannot fit the arena.
    /// Returns `DocumentError::InvalidInput` if the text contains control characters.
    pub fn validate(&self, name: &str, text: &str) -> Result<(), DocumentError> {
        if self.by_name.contains_key(name) {
            return Err(DocumentError::DuplicateName {
                name: name.to_owned(),
            });
        }

        let max_size = MAX_DOCUMENT_LENGTH - self.texts.bytes();
        if text.len() > max_size {
            return Err(DocumentError::TooLarge {
                size: text.len(),
                max_size,
            });
        }

        if contains_invalid_controls(text) {
            return Err(DocumentError::InvalidInput {
                reason: "control characters (0x00-0x1F excluding whitespace) are not allowed",
            });
        }

        Ok(())
    }

    /// Adds a document's text under `name`.
    ///
    /// # Errors
    ///
    /// See [`Corpus::validate`]. Nothing is stored when an error is returned.
    pub fn add(&mut self, name: &str, text: &str) -> Result<DocId, DocumentError> {
        self.validate(name, text)?;
        let doc_id = self.texts.push(text).ok_or(DocumentError::TooLarge {
            size: text.len(),
            max_size: MAX_DOCUMENT_LENGTH,
        })?;
        self.names.push(name.to_owned());
        self.by_name.insert(name.to_owned(), doc_id);
        Ok(doc_id)
    }

    /// Flattened text of a document.
    #[inline]
    pub fn text(&self, doc_id: DocId) -> Option<&str> {
        self.texts.get(doc_id)
    }

    /// Name of a document.
    #[inline]
    pub fn name(&self, doc_id: DocId) -> Option<&str> {
        self.names.get(doc_id as usize).map(String::as_str)
    }

    /// Looks a document up by name.
    #[inline]
    pub fn id_of(&self, name: &str) -> Option<DocId> {
        self.by_name.get(name).copied()
    }

    /// Iterates `(id, name, text)` in ingestion order.
    pub fn iter(&self) -> impl Iterator<Item = (DocId, &str, &str)> + '_ {
        self.names
            .iter()
            .zip(self.texts.iter())
            .enumerate()
            .map(|(i, (name, text))| (i as DocId, name.as_str(), text))
    }

    /// Substring occurrences of `word` in every document, in ingestion order.
    ///
    /// The word is lower-cased; an empty word yields an empty vector.
    pub fn frequency(&self, word: &str, kind: MatcherKind) -> Vec<(DocId, usize)> {
        let Some(word) = normalize_query(word) else {
            return Vec::new();
        };
        let pattern = Pattern::compile(kind, &word);
        self.iter()
            .map(|(doc_id, _, text)| (doc_id, pattern.count_in(text)))
            .collect()
    }

    /// Substring occurrences of `word` across the whole corpus.
    pub fn total_occurrences(&self, word: &str, kind: MatcherKind) -> usize {
        self.frequency(word, kind).iter().map(|&(_, n)| n).sum()
    }
}
