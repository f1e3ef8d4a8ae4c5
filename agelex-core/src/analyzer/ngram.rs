//! Word n-gram expansion.
//!
//! Lexicon terms may span several words (`"sad good"`), so the word
//! sequence is augmented with every contiguous window of `n` words,
//! rendered as one space-joined token.

use tracing::debug;

/// Emits every contiguous `n`-word window of `words`, joined by single
/// spaces, left to right.
///
/// For `n == 0` or fewer than `n` words, nothing is emitted.
/// For `len` words, exactly `len - n + 1` n-grams are emitted.
///
/// # Example
///
/// ```
/// use agelex_core::analyzer::ngram::extract_ngrams;
///
/// let words = ["i", "am", "happy"];
/// let mut grams = Vec::new();
/// extract_ngrams(&words, 2, |g| grams.push(g));
///
/// assert_eq!(grams, ["i am", "am happy"]);
/// ```
pub fn extract_ngrams<S, F>(words: &[S], n: usize, mut callback: F)
where
    S: AsRef<str>,
    F: FnMut(String),
{
    if n == 0 || words.len() < n {
        return;
    }

    for window in words.windows(n) {
        let len = window.iter().map(|w| w.as_ref().len()).sum::<usize>() + n - 1;
        let mut gram = String::with_capacity(len);
        for (i, word) in window.iter().enumerate() {
            if i > 0 {
                gram.push(' ');
            }
            gram.push_str(word.as_ref());
        }
        callback(gram);
    }
}

/// Counts `n`-grams without building them.
#[inline(always)]
pub fn count_ngrams(word_count: usize, n: usize) -> usize {
    if n == 0 || word_count < n {
        0
    } else {
        word_count - n + 1
    }
}

/// Builds the n-gram tokens for every requested size.
///
/// Sizes are handled independently and their results concatenated in
/// the order given. Sizes below 2 are ignored (unigrams are the words
/// themselves); sizes larger than the word count are skipped.
pub fn expand<S: AsRef<str>>(words: &[S], sizes: &[usize]) -> Vec<String> {
    let total = sizes
        .iter()
        .filter(|&&n| n >= 2)
        .map(|&n| count_ngrams(words.len(), n))
        .sum();
    let mut grams = Vec::with_capacity(total);

    for &n in sizes {
        if n < 2 {
            continue;
        }
        if words.len() < n {
            debug!(
                n,
                words = words.len(),
                "skipping n-gram size larger than word count"
            );
            continue;
        }
        extract_ngrams(words, n, |gram| grams.push(gram));
    }

    grams
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_bigrams() {
        let mut grams = Vec::new();
        extract_ngrams(&["a", "b", "c", "d"], 2, |g| grams.push(g));
        assert_eq!(grams, ["a b", "b c", "c d"]);
    }

    #[test]
    fn extract_trigrams() {
        let mut grams = Vec::new();
        extract_ngrams(&["a", "b", "c", "d"], 3, |g| grams.push(g));
        assert_eq!(grams, ["a b c", "b c d"]);
    }

    #[test]
    fn extract_exact_length() {
        let mut grams = Vec::new();
        extract_ngrams(&["sad", "good"], 2, |g| grams.push(g));
        assert_eq!(grams, ["sad good"]);
    }

    #[test]
    fn extract_too_short() {
        let mut grams = Vec::new();
        extract_ngrams(&["only"], 2, |g| grams.push(g));
        extract_ngrams::<&str, _>(&[], 2, |g| grams.push(g));
        extract_ngrams(&["a", "b"], 0, |g| grams.push(g));
        assert!(grams.is_empty());
    }

    #[test]
    fn count_basic() {
        assert_eq!(count_ngrams(5, 2), 4);
        assert_eq!(count_ngrams(5, 3), 3);
        assert_eq!(count_ngrams(2, 3), 0);
        assert_eq!(count_ngrams(3, 0), 0);
    }

    #[test]
    fn expand_concatenates_sizes() {
        let words = ["i", "am", "so", "happy"];
        let grams = expand(&words, &[2, 3]);
        assert_eq!(
            grams,
            ["i am", "am so", "so happy", "i am so", "am so happy"]
        );
        assert_eq!(grams.len(), count_ngrams(4, 2) + count_ngrams(4, 3));
    }

    #[test]
    fn expand_skips_oversized_but_keeps_others() {
        let words = ["sad", "good"];
        let grams = expand(&words, &[2, 3]);
        assert_eq!(grams, ["sad good"]);
    }

    #[test]
    fn expand_disabled() {
        let words = ["a", "b", "c"];
        assert!(expand(&words, &[]).is_empty());
        assert!(expand(&words, &[0]).is_empty());
        assert!(expand(&words, &[1]).is_empty());
    }

    #[test]
    fn expand_owned_words() {
        let words: Vec<String> = vec!["good".into(), "morning".into()];
        assert_eq!(expand(&words, &[2]), ["good morning"]);
    }
}
