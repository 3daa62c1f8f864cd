//! Query operations.
//!
//! Queries take plain strings and never fail: empty, unknown or malformed
//! input produces an empty result. Every query bumps the engine's query
//! counter.

use log::trace;
use sift_types::{Completions, DocId, PageScore, SpellCheck, TokenHits};

use crate::index::types::Sift;

impl Sift {
    /// Checks `word` against the vocabulary, suggesting corrections if absent.
    pub fn check_spelling(&self, word: &str) -> SpellCheck {
        self.count_query();
        self.index.vocabulary().check_spelling(word)
    }

    /// Vocabulary tokens within `max_distance` of `word`, closest first.
    pub fn suggest(&self, word: &str, max_distance: usize, limit: usize) -> Vec<String> {
        self.count_query();
        self.index.vocabulary().suggest(word, max_distance, limit)
    }

    /// Vocabulary tokens starting with `prefix`, sorted.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        self.count_query();
        self.index.completion().complete(prefix)
    }

    /// The first `max` completions of `prefix` and how many exist.
    pub fn complete_limited(&self, prefix: &str, max: usize) -> Completions {
        self.count_query();
        self.index.completion().complete_limited(prefix, max)
    }

    /// Documents containing `token` as a whole token, with per-document counts.
    pub fn search(&self, token: &str) -> TokenHits {
        self.count_query();
        let hits = self.index.search(token);
        trace!("search {:?}: {} documents", hits.token, hits.per_document.len());
        hits
    }

    /// Documents containing every token, ascending by id.
    pub fn search_all<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<DocId> {
        self.count_query();
        let docs = self.index.search_all(tokens);
        trace!("search_all over {} tokens: {} documents", tokens.len(), docs.len());
        docs
    }

    /// Whole-token occurrences of `token` in one document.
    pub fn count_in_document(&self, doc_id: DocId, token: &str) -> usize {
        self.count_query();
        self.index.count_in_document(doc_id, token)
    }

    /// Ranks every document by substring occurrences of `keywords`.
    pub fn rank<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<PageScore> {
        self.count_query();
        self.ranker.rank(&self.corpus, keywords)
    }

    /// Substring occurrences of `word` in each document, in ingestion order.
    pub fn frequency(&self, word: &str) -> Vec<(DocId, usize)> {
        self.count_query();
        self.corpus.frequency(word, self.config.ranking_matcher)
    }

    /// Substring occurrences of `word` across the corpus.
    pub fn total_occurrences(&self, word: &str) -> usize {
        self.count_query();
        self.corpus.total_occurrences(word, self.config.ranking_matcher)
    }

    /// Records a search for `token` and returns its corpus-wide occurrences.
    pub fn track(&mut self, token: &str) -> usize {
        self.count_query();
        self.tracker.record(&self.corpus, token)
    }

    /// The `n` most tracked tokens with their search counts.
    pub fn top_searches(&self, n: usize) -> Vec<(String, usize)> {
        self.tracker.top_n(n)
    }

    /// The `n` tokens found in the most documents.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        self.index.most_common(n)
    }
}
