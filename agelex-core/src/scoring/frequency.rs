//! Token frequency table.

use rustc_hash::FxHashMap;

/// Occurrence count of each distinct token in one token sequence.
///
/// Keys borrow from the token sequence. The sum of all counts always
/// equals the sequence length.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable<'t> {
    counts: FxHashMap<&'t str, u32>,
    total: usize,
}

impl<'t> FrequencyTable<'t> {
    /// Counts every token in `tokens`.
    pub fn from_tokens<S: AsRef<str>>(tokens: &'t [S]) -> Self {
        let mut counts = FxHashMap::default();
        counts.reserve(tokens.len());

        for token in tokens {
            *counts.entry(token.as_ref()).or_insert(0u32) += 1;
        }

        Self {
            counts,
            total: tokens.len(),
        }
    }

    /// Occurrences of `token`; zero when absent.
    #[inline(always)]
    pub fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Length of the counted token sequence.
    #[inline(always)]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens.
    #[inline(always)]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Iterates `(token, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'t str, u32)> + '_ {
        self.counts.iter().map(|(&token, &count)| (token, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicates() {
        let tokens = ["i", "am", "happy", "happy", "today"];
        let table = FrequencyTable::from_tokens(&tokens);
        assert_eq!(table.count("i"), 1);
        assert_eq!(table.count("am"), 1);
        assert_eq!(table.count("happy"), 2);
        assert_eq!(table.count("today"), 1);
        assert_eq!(table.count("sad"), 0);
        assert_eq!(table.distinct(), 4);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn counts_sum_to_sequence_length() {
        let inputs: [&[&str]; 4] = [
            &[],
            &["a"],
            &["a", "a", "a"],
            &["x", "y", "x y", "x", "y", "x y", "z"],
        ];

        for tokens in inputs {
            let table = FrequencyTable::from_tokens(tokens);
            let sum: usize = table.iter().map(|(_, c)| c as usize).sum();
            assert_eq!(sum, tokens.len());
            assert_eq!(table.total(), tokens.len());
        }
    }

    #[test]
    fn owned_tokens() {
        let tokens: Vec<String> = vec!["sad".into(), "good".into(), "sad good".into()];
        let table = FrequencyTable::from_tokens(&tokens);
        assert_eq!(table.count("sad good"), 1);
        assert_eq!(table.count("sad"), 1);
    }
}
