//! In-memory vocabulary and text retrieval engine.
//!
//! The building blocks can be used on their own or through the [`Sift`]
//! facade, which keeps them consistent:
//!
//! - [`Trie`]: arena prefix tree, the vocabulary store
//! - [`VocabularyIndex`]: membership and spelling suggestions
//! - [`PrefixCompletion`]: words sharing a prefix
//! - [`InvertedIndex`]: token postings, whole-token counts, AND queries
//! - [`Corpus`] and [`Ranker`]: substring counts and keyword ranking
//! - [`QueryFrequencyTracker`]: search history and popularity
//!
//! ```
//! use sift_core::{Document, Sift};
//!
//! let mut engine = Sift::new();
//! engine.add(Document::from_tokens("doc1", ["budget", "car", "rental"])).unwrap();
//! engine.add(Document::from_tokens("doc2", ["rental", "price", "canada"])).unwrap();
//!
//! assert_eq!(engine.search_all(&["rental", "car"]), vec![0]);
//! assert_eq!(engine.complete("ca"), ["canada", "car"]);
//! assert_eq!(engine.check_spelling("rentl").suggestions[0].token, "rental");
//! ```

pub mod analyzer;
pub mod arena;
pub mod completion;
pub mod corpus;
pub mod distance;
pub mod index;
pub mod inverted;
pub mod matcher;
pub mod ranker;
pub mod tracker;
pub mod trie;
pub mod vocabulary;

pub use completion::PrefixCompletion;
pub use corpus::{Corpus, Document};
pub use index::{EngineMetrics, IndexStats, Sift};
pub use inverted::InvertedIndex;
pub use matcher::{count_occurrences, ExactMatcher, Pattern};
pub use ranker::Ranker;
pub use tracker::QueryFrequencyTracker;
pub use trie::{NodeId, Trie};
pub use vocabulary::VocabularyIndex;

pub use sift_types::{
    Completions, DocId, DocumentError, IngestReport, MatcherKind, PageScore, SearchConfig,
    SearchRecord, SpellCheck, Suggestion, TokenHits,
};
