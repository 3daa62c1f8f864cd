//! Keyword relevance ranking by substring occurrence counts.
//!
//! A document's score is the total number of (possibly overlapping)
//! occurrences of every query keyword in its flattened text. `"car"` counts
//! inside `"cars"` and `"scar"` here, unlike the whole-token counts of the
//! [`InvertedIndex`](crate::InvertedIndex).

use log::trace;
use sift_types::{MatcherKind, PageScore};

use crate::analyzer::normalize_query;
use crate::corpus::Corpus;
use crate::matcher::Pattern;

/// Scores documents against a keyword list.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    matcher: MatcherKind,
}

impl Ranker {
    /// Creates a ranker using the given matching strategy.
    pub const fn new(matcher: MatcherKind) -> Self {
        Self { matcher }
    }

    /// The matching strategy in use.
    #[inline(always)]
    pub const fn matcher(&self) -> MatcherKind {
        self.matcher
    }

    /// Scores every document and orders them by descending score.
    ///
    /// Keywords are trimmed and lower-cased; empty keywords are ignored.
    /// Every document appears in the result, including those scoring 0.
    /// Documents with equal scores keep their ingestion order.
    pub fn rank<S: AsRef<str>>(&self, corpus: &Corpus, keywords: &[S]) -> Vec<PageScore> {
        let patterns: Vec<(String, Pattern)> = keywords
            .iter()
            .filter_map(|keyword| normalize_query(keyword.as_ref()))
            .map(|keyword| {
                let pattern = Pattern::compile(self.matcher, &keyword);
                (keyword, pattern)
            })
            .collect();
        trace!(
            "ranking {} documents for {} keywords with {}",
            corpus.len(),
            patterns.len(),
            self.matcher
        );

        let mut scores: Vec<PageScore> = corpus
            .iter()
            .map(|(doc_id, _, text)| {
                let mut page = PageScore::new(doc_id);
                page.keyword_counts.reserve(patterns.len());
                for (keyword, pattern) in &patterns {
                    let count = pattern.count_in(text);
                    page.score += count;
                    page.keyword_counts.push((keyword.clone(), count));
                }
                page
            })
            .collect();

        // Stable: equal scores stay in ingestion order
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        scores
    }
}
