//! Streaming Tokenizer Module
//!
//! Splits cleaned text into tokens, the last stage of the reference
//! analysis pipeline:
//!
//! ```text
//! raw row ──clean_into──> "budget car rental on" ──Tokenizer──> ["budget", "car", "rental"]
//! ```
//!
//! ## Key Features
//!
//! - **Zero Allocation**: Tokens are slices of the cleaned string
//! - **Streaming**: Tokens are emitted through a callback
//! - **Fast**: `memchr` scan for ASCII space (0x20)
//! - **Length Filter**: Tokens shorter than `min_len` bytes are discarded
//!
//! ## The Input Contract
//!
//! The tokenizer expects output of [`clean_into`](super::clean_into):
//! - ASCII-only, lowercase
//! - No leading or trailing whitespace
//! - No consecutive spaces between words
//!
//! Violations panic in debug builds.

use core::str;
use memchr::memchr_iter;

use super::normalizer::clean_into;

/// Default minimum token length; shorter tokens carry little meaning.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;

/// Streaming tokenizer - splits cleaned text into tokens.
///
/// ## Example
///
/// ```
/// use sift_core::analyzer::Tokenizer;
///
/// let tokenizer = Tokenizer::default();
/// let mut tokens = Vec::new();
///
/// tokenizer.tokenize("the car is on rental", |text, _pos| tokens.push(text));
///
/// assert_eq!(tokens, ["the", "car", "rental"]);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Tokenizer {
    min_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TOKEN_LEN)
    }
}

impl Tokenizer {
    /// Creates a tokenizer that keeps tokens of at least `min_len` bytes.
    #[inline]
    pub const fn new(min_len: usize) -> Self {
        Self { min_len }
    }

    /// The minimum kept token length.
    #[inline(always)]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    /// Tokenizes cleaned input and emits `(text, position)`.
    ///
    /// Positions count kept tokens only, starting at 0.
    #[inline]
    pub fn tokenize<'n, F>(&self, cleaned: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let bytes = cleaned.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "tokenizer: leading whitespace — cleaner contract violated"
        );
        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "tokenizer: trailing whitespace — cleaner contract violated"
        );
        debug_assert!(
            !cleaned.contains("  "),
            "tokenizer: consecutive spaces — cleaner contract violated"
        );

        let mut start = 0usize;
        let mut pos = 0u32;
        let mut push = |text: &'n str| {
            if text.len() >= self.min_len && !text.is_empty() {
                emit(text, pos);
                pos = pos.saturating_add(1);
            }
        };

        for i in memchr_iter(b' ', bytes) {
            push(&cleaned[start..i]);
            start = i + 1;
        }
        if start < bytes.len() {
            push(&cleaned[start..]);
        }
    }

    /// Cleans `raw` and collects the kept tokens.
    pub fn analyze(&self, raw: &str) -> Vec<String> {
        let mut cleaned = String::new();
        clean_into(raw, &mut cleaned);
        let mut tokens = Vec::new();
        self.tokenize(&cleaned, |text, _| tokens.push(text.to_owned()));
        tokens
    }
}
