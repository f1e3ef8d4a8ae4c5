//! Word tokenizer.
//!
//! Splits normalized text into the ordered word sequence that the scorer
//! counts. Tokenization is a seam: anything implementing [`Tokenize`] can
//! be plugged into the predictor, and [`WordTokenizer`] is the built-in
//! implementation.
//!
//! ## The Input Contract
//!
//! The tokenizer expects **pre-normalized** input:
//! - All lowercase
//! - No leading or trailing whitespace
//! - Single spaces between words
//!
//! [`TextNormalizer`](super::TextNormalizer) produces exactly that. Empty
//! runs are skipped, so a violated contract costs words, never a panic.
//!
//! ## Punctuation
//!
//! Leading and trailing ASCII punctuation is stripped from each word
//! (`"happy!"` becomes `"happy"`). A word made only of punctuation, such
//! as the emoticon `":)"`, is kept whole.

use memchr::memchr_iter;

/// Turns normalized text into an ordered sequence of word tokens.
pub trait Tokenize {
    /// Returns the words of `normalized`, in order. An empty vector means
    /// the text has no usable words.
    fn tokenize(&self, normalized: &str) -> Vec<String>;
}

/// Space-splitting tokenizer with punctuation trimming.
///
/// ## Example
///
/// ```
/// use agelex_core::analyzer::tokenizer::{Tokenize, WordTokenizer};
///
/// let words = WordTokenizer::new().tokenize("i am happy, today!");
/// assert_eq!(words, ["i", "am", "happy", "today"]);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Emits `(word, position)` for each word, without allocating.
    ///
    /// Words are slices of `normalized`.
    pub fn for_each_word<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let bytes = normalized.as_bytes();
        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0u32;

        let mut push = |run: &'n str, pos: &mut u32| {
            let word = trim_punctuation(run);
            if !word.is_empty() {
                emit(word, *pos);
                *pos = pos.saturating_add(1);
            }
        };

        // Splitting on ASCII space (never a UTF-8 continuation byte) keeps
        // every slice on a char boundary.
        for i in memchr_iter(b' ', bytes) {
            if start < i {
                push(&normalized[start..i], &mut pos);
            }
            start = i + 1;
        }

        if start < bytes.len() {
            push(&normalized[start..], &mut pos);
        }
    }
}

impl Tokenize for WordTokenizer {
    fn tokenize(&self, normalized: &str) -> Vec<String> {
        let mut words = Vec::new();
        self.for_each_word(normalized, |word, _| words.push(word.to_owned()));
        words
    }
}

#[inline]
fn trim_punctuation(run: &str) -> &str {
    let trimmed = run.trim_matches(|c: char| c.is_ascii_punctuation());
    if trimmed.is_empty() {
        run
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(&str, u32)> {
        let mut out = Vec::new();
        WordTokenizer::new().for_each_word(input, |text, pos| out.push((text, pos)));
        out
    }

    #[test]
    fn single_word() {
        let out = collect("hello");
        assert_eq!(out, vec![("hello", 0)]);
    }

    #[test]
    fn positions_are_sequential() {
        let out = collect("the quick brown fox");
        assert_eq!(out.len(), 4);
        for (i, (_, pos)) in out.iter().enumerate() {
            assert_eq!(*pos, i as u32);
        }
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("").is_empty());
        assert!(WordTokenizer::new().tokenize("").is_empty());
    }

    #[test]
    fn stray_spaces_are_skipped() {
        let out = collect(" a  b ");
        assert_eq!(out, vec![("a", 0), ("b", 1)]);
    }

    #[test]
    fn punctuation_trimmed() {
        let words = WordTokenizer::new().tokenize("\"well,\" she said... ok?");
        assert_eq!(words, ["well", "she", "said", "ok"]);
    }

    #[test]
    fn inner_apostrophes_kept() {
        let words = WordTokenizer::new().tokenize("don't you're");
        assert_eq!(words, ["don't", "you're"]);
    }

    #[test]
    fn emoticons_kept() {
        let words = WordTokenizer::new().tokenize("lol :) :-(");
        assert_eq!(words, ["lol", ":)", ":-("]);
    }

    #[test]
    fn words_are_slices_of_input() {
        let input = String::from("hello world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        WordTokenizer::new().for_each_word(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn unicode_words() {
        let words = WordTokenizer::new().tokenize("café über");
        assert_eq!(words, ["café", "über"]);
    }
}
