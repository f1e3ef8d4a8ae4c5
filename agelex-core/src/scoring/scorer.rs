//! Score aggregation and match ranking.
//!
//! Both views are computed from the same `&[MatchRecord]` and neither
//! mutates it, so they can run side by side.

use core::cmp::Ordering;

use agelex_types::{Encoding, MatchRecord, RankedMatch, SortKey, SortOrder, MAX_PLACES};

use crate::error::ScoreError;

/// Aggregation settings shared by the score and the ranked view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregation {
    /// Weighting scheme
    pub encoding: Encoding,
    /// Divisor for frequency weighting
    pub word_count: usize,
    /// Decimal places of the returned values
    pub places: u8,
}

impl Aggregation {
    #[inline(always)]
    fn check(&self) -> Result<(), ScoreError> {
        if self.word_count == 0 {
            Err(ScoreError::ZeroWordCount)
        } else {
            Ok(())
        }
    }

    /// Unrounded share of one match in the score.
    #[inline(always)]
    fn contribution(&self, record: &MatchRecord<'_>) -> f64 {
        match self.encoding {
            Encoding::Frequency => (record.count as f64 / self.word_count as f64) * record.weight,
            Encoding::Binary => record.weight,
        }
    }
}

/// `intercept + Σ contribution`, rounded.
///
/// # Errors
///
/// Returns `ScoreError::ZeroWordCount` when `word_count` is zero.
pub fn score(
    matches: &[MatchRecord<'_>],
    intercept: f64,
    agg: Aggregation,
) -> Result<f64, ScoreError> {
    agg.check()?;
    let sum: f64 = matches.iter().map(|m| agg.contribution(m)).sum();
    Ok(round_to(intercept + sum, agg.places))
}

/// Match records with their rounded contributions, sorted by `key`.
///
/// The sort is stable: equal keys keep lexicon order.
///
/// # Errors
///
/// Returns `ScoreError::ZeroWordCount` when `word_count` is zero.
pub fn rank(
    matches: &[MatchRecord<'_>],
    agg: Aggregation,
    key: SortKey,
    order: SortOrder,
) -> Result<Vec<RankedMatch>, ScoreError> {
    agg.check()?;

    let mut ranked: Vec<RankedMatch> = matches
        .iter()
        .map(|m| RankedMatch {
            term: m.term.to_owned(),
            count: m.count,
            weight: m.weight,
            contribution: round_to(agg.contribution(m), agg.places),
        })
        .collect();

    let key_of = |m: &RankedMatch| -> f64 {
        match key {
            SortKey::Contribution => m.contribution,
            SortKey::Frequency => m.count as f64,
            SortKey::Weight => m.weight,
        }
    };

    ranked.sort_by(|a, b| {
        let ord: Ordering = key_of(a).total_cmp(&key_of(b));
        match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });

    Ok(ranked)
}

/// Rounds half away from zero to `places` decimals (at most 15).
#[inline]
pub fn round_to(value: f64, places: u8) -> f64 {
    let factor = 10f64.powi(i32::from(places.min(MAX_PLACES)));
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Nearest whole number of years for a continuous score.
#[inline]
pub fn whole_years(score: f64) -> i64 {
    score.round() as i64
}
