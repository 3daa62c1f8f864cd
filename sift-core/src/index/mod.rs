//! The retrieval engine facade.
//!
//! [`Sift`] ties the document store, the inverted index with its vocabulary,
//! the ranker and the search tracker together behind one ingestion path.
//!
//! Semantics:
//! - `search`, `search_all` and `count_in_document` match whole tokens
//! - `rank`, `frequency`, `total_occurrences` and `track` count substrings
//!   in the stored text
//!
//! Threading:
//! - Queries take `&self`, so a built engine can be shared read-only across
//!   threads. Ingestion and `track` take `&mut self`.

mod api;
mod search;
mod stats;
mod types;

pub use stats::IndexStats;
pub use types::{EngineMetrics, Sift};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Document;
    use sift_types::{DocumentError, SearchConfig};

    fn doc(name: &str, text: &str) -> Document {
        Document::from_tokens(name, text.split_whitespace())
    }

    fn engine() -> Sift {
        let mut engine = Sift::new();
        engine.add(doc("doc1", "budget car rental")).expect("should add doc");
        engine.add(doc("doc2", "rental price canada")).expect("should add doc");
        engine
    }

    #[test]
    fn basic_add_and_search() {
        let engine = engine();
        assert_eq!(engine.len(), 2);
        assert_eq!(engine.get(0), Some("budget car rental"));
        assert_eq!(engine.name(1), Some("doc2"));
        assert_eq!(engine.id_of("doc1"), Some(0));
        assert_eq!(engine.get(2), None);

        let hits = engine.search("rental");
        assert_eq!(hits.documents().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(engine.search_all(&["rental", "car"]), vec![0]);
    }

    #[test]
    fn spelling_and_completion() {
        let engine = engine();
        assert!(engine.check_spelling("Rental").found);

        let check = engine.check_spelling("rentl");
        assert!(!check.found);
        assert_eq!(check.word, "rentl");
        assert_eq!(check.suggestions[0].token, "rental");
        assert_eq!(check.suggestions[0].distance, 1);

        assert_eq!(engine.suggest("budgt", 1, 5), vec!["budget"]);
        assert_eq!(engine.complete("ca"), vec!["canada", "car"]);
        let limited = engine.complete_limited("", 2);
        assert_eq!(limited.words, vec!["budget", "canada"]);
        assert_eq!(limited.total, 5);
    }

    #[test]
    fn whole_token_and_substring_counts_differ() {
        let mut engine = Sift::new();
        engine.add(doc("a", "cars scar car")).expect("should add doc");
        assert_eq!(engine.count_in_document(0, "car"), 1);
        assert_eq!(engine.search("car").total(), 1);
        assert_eq!(engine.total_occurrences("car"), 3);
        assert_eq!(engine.frequency("car"), vec![(0, 3)]);
    }

    #[test]
    fn rank_is_stable() {
        let mut engine = Sift::new();
        engine.add(doc("a", "toronto")).expect("should add doc");
        engine.add(doc("b", "car rental car")).expect("should add doc");
        engine.add(doc("c", "ottawa")).expect("should add doc");
        engine.add(doc("d", "rental")).expect("should add doc");

        let ranked = engine.rank(&["car", "rental"]);
        let ids: Vec<_> = ranked.iter().map(|p| p.doc_id).collect();
        assert_eq!(ids, vec![1, 3, 0, 2]);
        assert_eq!(ranked[0].score, 3);
    }

    #[test]
    fn tracking_and_top_searches() {
        let mut engine = engine();
        assert_eq!(engine.track("rental"), 2);
        assert_eq!(engine.track("RENTAL"), 2);
        assert_eq!(engine.track("car"), 1);
        assert_eq!(engine.track(""), 0);
        assert_eq!(
            engine.top_searches(5),
            vec![("rental".to_owned(), 2), ("car".to_owned(), 1)]
        );
        assert!(engine.top_searches(0).is_empty());
        assert_eq!(engine.tracker().total_searches(), 3);
    }

    #[test]
    fn malformed_queries_fail_closed() {
        let engine = engine();
        assert!(engine.search("").is_empty());
        assert!(engine.search("   ").is_empty());
        assert!(engine.search("r3nt@l").is_empty());
        assert!(engine.search_all::<&str>(&[]).is_empty());
        assert!(engine.search_all(&["rental", ""]).is_empty());
        assert!(engine.suggest("", 2, 5).is_empty());
        assert!(!engine.check_spelling("").found);
        assert!(engine.frequency("").is_empty());
        assert_eq!(engine.total_occurrences("  "), 0);
    }

    #[test]
    fn rejected_documents_leave_engine_unchanged() {
        let mut engine = engine();
        let before = engine.stats();

        let err = engine.add(doc("doc1", "honda civic")).unwrap_err();
        assert!(matches!(err, DocumentError::DuplicateName { .. }));

        let err = engine
            .add(Document::new("bad", "bad\x00text", vec!["honda".into()]))
            .unwrap_err();
        assert!(matches!(err, DocumentError::InvalidInput { .. }));

        assert_eq!(engine.stats(), before);
        assert!(engine.search("honda").is_empty());
        assert_eq!(engine.add(doc("doc3", "honda")).expect("should add doc"), 2);
    }

    #[test]
    fn add_batch_skips_and_continues() {
        let mut engine = Sift::new();
        let report = engine.add_batch(vec![
            doc("a", "budget car"),
            doc("a", "duplicate"),
            doc("b", "rental price"),
        ]);
        assert_eq!(report.added, 2);
        assert_eq!(report.failed, 1);
        assert!(matches!(
            report.last_error,
            Some(DocumentError::DuplicateName { .. })
        ));
        assert_eq!(engine.len(), 2);
        assert!(engine.search("duplicate").is_empty());
        assert_eq!(engine.search("price").documents().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn add_text_runs_analyzer() {
        let mut engine = Sift::new();
        let id = engine
            .add_text("listing.csv", "Budget|Car-Rental, Toronto (ON)")
            .expect("should add doc");
        assert_eq!(engine.get(id), Some("budget|car-rental, toronto (on)"));
        assert!(engine.check_spelling("toronto").found);
        assert!(!engine.check_spelling("on").found);
        assert_eq!(engine.total_occurrences("car-rental"), 1);
    }

    #[test]
    fn stats_snapshot() {
        let engine = engine();
        let stats = engine.stats();
        assert_eq!(stats.num_documents, 2);
        assert_eq!(stats.vocabulary_size, 5);
        assert_eq!(stats.total_postings, 6);
        assert_eq!(stats.text_bytes, 17 + 19);
        assert_eq!(stats.postings_per_document(), 3.0);
        assert_eq!(
            stats.to_string(),
            "2 docs, 5 tokens, 6 postings, 36 text bytes"
        );
        assert_eq!(Sift::new().stats().postings_per_document(), 0.0);
    }

    #[test]
    fn most_common_tokens() {
        let engine = engine();
        assert_eq!(
            engine.most_common(2),
            vec![("rental".to_owned(), 2), ("budget".to_owned(), 1)]
        );
    }

    #[test]
    fn custom_config() {
        let mut engine = Sift::with_config(SearchConfig::strict());
        engine.add(doc("a", "rental")).expect("should add doc");
        assert!(engine.check_spelling("rentel").suggestions.len() == 1);
        assert!(engine.check_spelling("rntel").suggestions.is_empty());
        assert_eq!(engine.config().max_edit_distance, 1);
    }

    #[test]
    fn metrics_tracks_operations() {
        let mut engine = Sift::new();

        let metrics = engine.metrics();
        assert_eq!(metrics.documents_indexed, 0);
        assert_eq!(metrics.queries_executed, 0);
        assert_eq!(metrics.current_doc_count, 0);

        engine.add(doc("a", "doc one")).unwrap();
        engine.add(doc("b", "doc two")).unwrap();
        engine.add(doc("c", "doc three")).unwrap();

        engine.search("doc");
        engine.complete("t");
        engine.track("one");

        let metrics = engine.metrics();
        assert_eq!(metrics.documents_indexed, 3);
        assert_eq!(metrics.queries_executed, 3);
        assert_eq!(metrics.current_doc_count, 3);

        engine.clear();
        assert_eq!(
            engine.metrics(),
            EngineMetrics {
                documents_indexed: 0,
                queries_executed: 0,
                current_doc_count: 0
            }
        );
    }

    #[test]
    fn clear_resets() {
        let mut engine = engine();
        engine.track("car");
        engine.clear();
        assert!(engine.is_empty());
        assert!(engine.search("car").is_empty());
        assert!(engine.complete("").is_empty());
        assert!(engine.top_searches(3).is_empty());
        assert_eq!(engine.add(doc("doc1", "again")).expect("should add doc"), 0);
    }

    #[test]
    fn engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Sift>();
    }
}
