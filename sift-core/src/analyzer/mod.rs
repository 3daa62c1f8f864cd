//! Reference text analysis pipeline.
//!
//! The engine itself accepts pre-tokenized documents; this module is the
//! collaborator that produces them from raw rows:
//! - **Normalizer**: Keeps letters, lower-cases, turns delimiters into spaces
//! - **Tokenizer**: Splits cleaned text and drops short tokens

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::{clean, clean_into, normalize_query};
pub use tokenizer::{Tokenizer, DEFAULT_MIN_TOKEN_LEN};
