//! Statistics and IndexStats.

use crate::index::types::Sift;

/// A snapshot of index statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of documents in the index.
    pub num_documents: usize,
    /// Number of distinct tokens.
    pub vocabulary_size: usize,
    /// Total number of (token, document) postings.
    pub total_postings: usize,
    /// Bytes of stored document text.
    pub text_bytes: usize,
}

impl Sift {
    /// Returns index statistics.
    pub fn stats(&self) -> IndexStats {
        IndexStats::from_engine(self)
    }
}

impl IndexStats {
    /// Constructs stats from an engine.
    pub fn from_engine(engine: &Sift) -> Self {
        Self {
            num_documents: engine.corpus.len(),
            vocabulary_size: engine.index.vocabulary().len(),
            total_postings: engine.index.total_postings(),
            text_bytes: engine.corpus.text_bytes(),
        }
    }

    /// Average number of distinct tokens per document.
    pub fn postings_per_document(&self) -> f64 {
        if self.num_documents == 0 {
            0.0
        } else {
            self.total_postings as f64 / self.num_documents as f64
        }
    }
}

impl core::fmt::Display for IndexStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} docs, {} tokens, {} postings, {} text bytes",
            self.num_documents, self.vocabulary_size, self.total_postings, self.text_bytes
        )
    }
}
