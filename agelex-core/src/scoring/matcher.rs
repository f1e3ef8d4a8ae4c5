//! Lexicon matching.

use agelex_types::{MatchRecord, WeightBounds};

use crate::lexicon::Lexicon;
use crate::scoring::FrequencyTable;

/// Intersects the lexicon with a frequency table.
///
/// Walks the lexicon once, in entry order, with a constant-time count
/// lookup per term. Terms outside `bounds` or absent from the input
/// produce no record.
pub fn find_matches<'l>(
    lexicon: &'l Lexicon,
    table: &FrequencyTable<'_>,
    bounds: WeightBounds,
) -> Vec<MatchRecord<'l>> {
    lexicon
        .entries()
        .iter()
        .filter(|entry| bounds.contains(entry.weight))
        .filter_map(|entry| {
            let count = table.count(&entry.term);
            (count > 0).then(|| MatchRecord::new(&entry.term, count, entry.weight))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::from_entries([("happy", 0.5), ("sad good", -0.2), ("today", 0.1)], 10.0)
    }

    #[test]
    fn sparse_matches_in_lexicon_order() {
        let lex = lexicon();
        let tokens = ["today", "i", "am", "happy", "happy"];
        let table = FrequencyTable::from_tokens(&tokens);

        let matches = find_matches(&lex, &table, WeightBounds::default());
        assert_eq!(
            matches,
            vec![
                MatchRecord::new("happy", 2, 0.5),
                MatchRecord::new("today", 1, 0.1),
            ]
        );
    }

    #[test]
    fn ngram_terms_match_composite_tokens() {
        let lex = lexicon();
        let tokens = ["sad", "good", "sad good"];
        let table = FrequencyTable::from_tokens(&tokens);

        let matches = find_matches(&lex, &table, WeightBounds::default());
        assert_eq!(matches, vec![MatchRecord::new("sad good", 1, -0.2)]);
    }

    #[test]
    fn bounds_filter_weights() {
        let lex = lexicon();
        let tokens = ["happy", "sad good", "today"];
        let table = FrequencyTable::from_tokens(&tokens);

        let positive = find_matches(&lex, &table, WeightBounds { min: 0.0, max: f64::INFINITY });
        assert!(positive.iter().all(|m| m.weight >= 0.0));
        assert_eq!(positive.len(), 2);

        let narrow = find_matches(&lex, &table, WeightBounds { min: 0.1, max: 0.1 });
        assert_eq!(narrow, vec![MatchRecord::new("today", 1, 0.1)]);
    }

    #[test]
    fn no_overlap_no_matches() {
        let lex = lexicon();
        let tokens = ["nothing", "here"];
        let table = FrequencyTable::from_tokens(&tokens);
        assert!(find_matches(&lex, &table, WeightBounds::default()).is_empty());
    }
}
