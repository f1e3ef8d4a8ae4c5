//! Text analysis pipeline.
//!
//! This module provides the text processing stages that run before scoring:
//! - **Normalizer**: Lowercases and trims raw text
//! - **Spelling**: Optionally rewrites British spellings to American
//! - **Tokenizer**: Splits normalized text into words
//! - **N-gram**: Adds multi-word tokens for phrase lookups

pub mod ngram;
pub mod normalizer;
pub mod spelling;
pub mod tokenizer;

pub use normalizer::TextNormalizer;
pub use spelling::{IdentitySpelling, SpellingTable, SpellingTranslator};
pub use tokenizer::{Tokenize, WordTokenizer};
