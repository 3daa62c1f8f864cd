//! Token → document index with whole-token counts.
//!
//! Ingestion is one pass per document: every token is inserted into the
//! vocabulary trie, the document is appended to the token's posting list
//! (kept on the terminal node), and the token's node id is appended to the
//! document's term stream. Postings are therefore sorted by construction and
//! a per-document count is a scan of one term stream comparing node ids.
//!
//! Memory Layout:
//! - Term streams of all documents share one contiguous `Vec<NodeId>`
//! - Each document owns a `Span` into that vector
//! - Posting lists live on the trie's terminal nodes
//!
//! Matching here is whole-token equality: `"car"` does not match inside
//! `"cars"`. Substring counting is the job of the
//! [`Ranker`](crate::Ranker) and [`Corpus::frequency`](crate::Corpus::frequency).

use smallvec::SmallVec;

use sift_types::{DocId, SearchConfig, TokenHits};

use crate::analyzer::normalize_query;
use crate::arena::Span;
use crate::completion::PrefixCompletion;
use crate::trie::NodeId;
use crate::vocabulary::VocabularyIndex;

/// Inverted index over tokenized documents.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    vocabulary: VocabularyIndex,
    terms: Vec<NodeId>,
    spans: Vec<Span>,
}

impl InvertedIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty index whose vocabulary uses `config` for spelling.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            vocabulary: VocabularyIndex::with_config(config),
            ..Self::default()
        }
    }

    /// Number of indexed documents.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if no document has been indexed.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The vocabulary of every indexed token.
    #[inline(always)]
    pub fn vocabulary(&self) -> &VocabularyIndex {
        &self.vocabulary
    }

    /// Prefix completion over the indexed vocabulary.
    #[inline]
    pub fn completion(&self) -> PrefixCompletion<'_> {
        self.vocabulary.completion()
    }

    /// Removes every document and token.
    pub fn clear(&mut self) {
        self.vocabulary.clear();
        self.terms.clear();
        self.spans.clear();
    }

    /// Indexes the next document and returns its id.
    ///
    /// Ids are assigned sequentially from 0. Empty tokens are skipped.
    pub fn insert_document<S: AsRef<str>>(&mut self, tokens: &[S]) -> DocId {
        debug_assert!(self.spans.len() < DocId::MAX as usize);
        let doc_id = self.spans.len() as DocId;
        let offset = self.terms.len();

        for token in tokens {
            let token = token.as_ref();
            if token.is_empty() {
                continue;
            }
            let trie = self.vocabulary.trie_mut();
            let node = trie.insert(token);
            trie.add_posting(node, doc_id);
            self.terms.push(node);
        }

        debug_assert!(self.terms.len() <= u32::MAX as usize);
        let len = self.terms.len() - offset;
        self.spans.push(Span::new(offset as u32, len as u32));
        doc_id
    }

    /// Node ids of a document's tokens, in document order.
    pub fn document_terms(&self, doc_id: DocId) -> &[NodeId] {
        match self.spans.get(doc_id as usize) {
            Some(span) => &self.terms[span.offset()..span.offset() + span.len()],
            None => &[],
        }
    }

    #[inline]
    fn count_node(&self, doc_id: DocId, node: NodeId) -> usize {
        self.document_terms(doc_id)
            .iter()
            .filter(|&&term| term == node)
            .count()
    }

    /// Documents containing exactly `token` (not normalized), ascending.
    #[inline]
    pub fn postings(&self, token: &str) -> &[DocId] {
        self.vocabulary.trie().postings(token)
    }

    /// Whole-token occurrences of `token` in one document.
    pub fn count_in_document(&self, doc_id: DocId, token: &str) -> usize {
        normalize_query(token)
            .and_then(|t| self.vocabulary.trie().node(&t))
            .map_or(0, |node| self.count_node(doc_id, node))
    }

    /// Finds the documents containing `token` and counts it in each.
    ///
    /// The token is lower-cased. Unknown or empty tokens produce an empty
    /// result, never an error.
    pub fn search(&self, token: &str) -> TokenHits {
        let Some(token) = normalize_query(token) else {
            return TokenHits::default();
        };
        let Some(node) = self.vocabulary.trie().node(&token) else {
            return TokenHits::empty(token);
        };

        let per_document = self
            .vocabulary
            .trie()
            .postings_at(node)
            .iter()
            .map(|&doc_id| (doc_id, self.count_node(doc_id, node)))
            .collect();
        TokenHits {
            token,
            per_document,
        }
    }

    /// Documents containing every token (AND), ascending.
    ///
    /// Empty input, or any token without postings, yields an empty result.
    pub fn search_all<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<DocId> {
        if tokens.is_empty() {
            return Vec::new();
        }

        let trie = self.vocabulary.trie();
        let mut lists: SmallVec<[&[DocId]; 8]> = SmallVec::with_capacity(tokens.len());
        for token in tokens {
            let Some(node) = normalize_query(token.as_ref()).and_then(|t| trie.node(&t)) else {
                return Vec::new();
            };
            lists.push(trie.postings_at(node));
        }

        // Seed with the shortest list so the candidate set starts small
        lists.sort_unstable_by_key(|list| list.len());
        let mut candidates: SmallVec<[DocId; 64]> = SmallVec::from_slice(lists[0]);
        for postings in &lists[1..] {
            Self::intersect(&mut candidates, postings);
            if candidates.is_empty() {
                break;
            }
        }

        candidates.into_vec()
    }

    /// Keeps only candidates present in `postings`; both sorted ascending.
    #[inline(always)]
    fn intersect(candidates: &mut SmallVec<[DocId; 64]>, postings: &[DocId]) {
        let mut write_idx = 0usize;
        let mut posting_idx = 0usize;

        for read_idx in 0..candidates.len() {
            let doc_id = candidates[read_idx];

            while posting_idx < postings.len() && postings[posting_idx] < doc_id {
                posting_idx += 1;
            }

            if posting_idx < postings.len() && postings[posting_idx] == doc_id {
                candidates[write_idx] = doc_id;
                write_idx += 1;
                posting_idx += 1;
            }
        }

        candidates.truncate(write_idx);
    }

    /// Tokens appearing in the most documents, with their document counts.
    ///
    /// Ties are broken lexicographically.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        if n == 0 {
            return Vec::new();
        }
        let trie = self.vocabulary.trie();
        let mut counts = Vec::with_capacity(trie.len());
        trie.for_each(|token, node| counts.push((token.to_owned(), trie.postings_at(node).len())));
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(n);
        counts
    }

    /// Total number of (token, document) pairs.
    pub fn total_postings(&self) -> usize {
        let trie = self.vocabulary.trie();
        let mut total = 0;
        trie.for_each(|_, node| total += trie.postings_at(node).len());
        total
    }
}
