//! Engine state and lifecycle.

use core::sync::atomic::{AtomicU64, Ordering};

use sift_types::SearchConfig;

use crate::corpus::Corpus;
use crate::inverted::InvertedIndex;
use crate::ranker::Ranker;
use crate::tracker::QueryFrequencyTracker;

/// In-memory document retrieval engine.
///
/// Owns the raw text of every document ([`Corpus`]), the token side
/// ([`InvertedIndex`] and its vocabulary) and the search history
/// ([`QueryFrequencyTracker`]). Documents are validated before either side
/// is touched, so the two always describe the same documents under the same
/// ids.
#[derive(Debug)]
pub struct Sift {
    pub(crate) corpus: Corpus,
    pub(crate) index: InvertedIndex,
    pub(crate) tracker: QueryFrequencyTracker,
    pub(crate) ranker: Ranker,
    pub(crate) config: SearchConfig,
    /// Total number of queries executed
    pub(crate) query_count: AtomicU64,
    /// Total number of documents added
    pub(crate) documents_added: u64,
}

impl Default for Sift {
    fn default() -> Self {
        Self::new()
    }
}

impl Sift {
    /// Creates a new, empty engine.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Creates a new engine with custom configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            corpus: Corpus::new(),
            index: InvertedIndex::with_config(config),
            tracker: QueryFrequencyTracker::new(config.tracking_matcher),
            ranker: Ranker::new(config.ranking_matcher),
            config,
            query_count: AtomicU64::new(0),
            documents_added: 0,
        }
    }

    /// The active configuration.
    #[inline(always)]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the number of documents in the index.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    /// Returns `true` if the index contains no documents.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Document names and text.
    #[inline(always)]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Token postings and vocabulary.
    #[inline(always)]
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Search history.
    #[inline(always)]
    pub fn tracker(&self) -> &QueryFrequencyTracker {
        &self.tracker
    }

    /// Removes all documents and search history and resets the counters.
    pub fn clear(&mut self) {
        self.corpus.clear();
        self.index.clear();
        self.tracker.clear();
        self.query_count.store(0, Ordering::Relaxed);
        self.documents_added = 0;
    }

    #[inline(always)]
    pub(crate) fn count_query(&self) {
        self.query_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns basic metrics about the engine's operation.
    #[inline(always)]
    #[must_use]
    pub fn metrics(&self) -> EngineMetrics {
        EngineMetrics {
            documents_indexed: self.documents_added,
            queries_executed: self.query_count.load(Ordering::Relaxed),
            current_doc_count: self.corpus.len() as u64,
        }
    }
}

/// Basic operational metrics for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineMetrics {
    /// Total number of documents added since creation or the last clear.
    pub documents_indexed: u64,
    /// Total number of queries executed.
    pub queries_executed: u64,
    /// Current number of documents in the index.
    pub current_doc_count: u64,
}
