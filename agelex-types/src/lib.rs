//! Core types for the agelex age estimator.
//!
//! This crate holds the plain data shared between the scoring pipeline
//! and its callers:
//!
//! - **Configuration**: the validated [`PredictConfig`] and its enumerated options
//! - **Match data**: [`MatchRecord`] and the ranked [`RankedMatch`] view
//! - **Results**: the tagged [`Prediction`] variant returned per call

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;

use serde::Serialize;

/// Default decimal precision for scores and contributions.
pub const DEFAULT_PLACES: u8 = 9;

/// Largest precision honoured when rounding. `f64` carries ~15-17
/// significant digits, so anything beyond this is noise.
pub const MAX_PLACES: u8 = 15;

/// N-gram sizes used when the caller does not choose any.
pub const DEFAULT_NGRAMS: [usize; 2] = [2, 3];

/// A lexicon term found in the input.
///
/// Borrowed from the lexicon; only lives for the duration of one call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchRecord<'a> {
    /// Lexicon term (a word or a space-joined n-gram)
    pub term: &'a str,
    /// Occurrences of the term in the token sequence
    pub count: u32,
    /// Lexicon weight of the term
    pub weight: f64,
}

impl<'a> MatchRecord<'a> {
    /// Creates a new match record.
    #[inline(always)]
    pub const fn new(term: &'a str, count: u32, weight: f64) -> Self {
        Self {
            term,
            count,
            weight,
        }
    }
}

impl fmt::Display for MatchRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} x{} weight={}", self.term, self.count, self.weight)
    }
}

/// A match record with its contribution to the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMatch {
    /// Lexicon term
    pub term: String,
    /// Occurrences of the term in the token sequence
    pub count: u32,
    /// Lexicon weight of the term
    pub weight: f64,
    /// Weighted share of the term in the final score, rounded
    pub contribution: f64,
}

/// Score and ranked matches derived from the same match set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullPrediction {
    /// Estimated age
    pub score: f64,
    /// Contributing terms, ranked
    pub matches: Vec<RankedMatch>,
}

/// Result of a single prediction call.
///
/// The variant is chosen by [`OutputKind`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Prediction {
    /// Numeric score (`output = "lex"`)
    Score(f64),
    /// Ranked match list (`output = "matches"`)
    Matches(Vec<RankedMatch>),
    /// Both of the above (`output = "full"`)
    Full(FullPrediction),
}

impl Prediction {
    /// Returns the numeric score, if this variant carries one.
    #[must_use]
    pub fn score(&self) -> Option<f64> {
        match self {
            Prediction::Score(score) => Some(*score),
            Prediction::Full(full) => Some(full.score),
            Prediction::Matches(_) => None,
        }
    }

    /// Returns the ranked matches, if this variant carries them.
    #[must_use]
    pub fn matches(&self) -> Option<&[RankedMatch]> {
        match self {
            Prediction::Matches(matches) => Some(matches),
            Prediction::Full(full) => Some(&full.matches),
            Prediction::Score(_) => None,
        }
    }
}

/// Returned when an enumerated option receives an unrecognized value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue {
    /// Option name
    pub option: &'static str,
    /// The rejected value
    pub value: String,
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized value {:?} for option `{}`", self.value, self.option)
    }
}

impl core::error::Error for UnknownValue {}

/// Which view of the match set a call returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputKind {
    /// Numeric score
    #[default]
    Lex,
    /// Ranked match list
    Matches,
    /// Score and match list
    Full,
}

impl FromStr for OutputKind {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lex" => Ok(OutputKind::Lex),
            "matches" => Ok(OutputKind::Matches),
            "full" => Ok(OutputKind::Full),
            _ => Err(UnknownValue {
                option: "output",
                value: s.to_owned(),
            }),
        }
    }
}

/// Weighting scheme applied during aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// `(count / wordcount) * weight`
    #[default]
    Frequency,
    /// Each matched term adds its raw weight once.
    Binary,
}

impl FromStr for Encoding {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "freq" | "frequency" => Ok(Encoding::Frequency),
            "binary" => Ok(Encoding::Binary),
            _ => Err(UnknownValue {
                option: "encoding",
                value: s.to_owned(),
            }),
        }
    }
}

/// Spelling locale of the input text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    /// American spelling, left as-is
    #[default]
    Us,
    /// British spelling, rewritten to American before matching
    Gb,
}

impl FromStr for Locale {
    type Err = UnknownValue;

    /// Accepts region-qualified tags such as `en-GB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if upper.contains("GB") {
            Ok(Locale::Gb)
        } else if upper.contains("US") {
            Ok(Locale::Us)
        } else {
            Err(UnknownValue {
                option: "locale",
                value: s.to_owned(),
            })
        }
    }
}

/// Sort key for the ranked match view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Contribution to the score (`"lex"`)
    Contribution,
    /// Occurrence count (`"freq"`)
    #[default]
    Frequency,
    /// Raw lexicon weight (`"weight"`)
    Weight,
}

impl FromStr for SortKey {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lex" | "contribution" => Ok(SortKey::Contribution),
            "freq" | "frequency" | "count" => Ok(SortKey::Frequency),
            "weight" => Ok(SortKey::Weight),
            _ => Err(UnknownValue {
                option: "sortBy",
                value: s.to_owned(),
            }),
        }
    }
}

/// Direction of the ranked match view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Largest key first
    #[default]
    Descending,
    /// Smallest key first
    Ascending,
}

impl FromStr for SortOrder {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desc" | "descending" => Ok(SortOrder::Descending),
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            _ => Err(UnknownValue {
                option: "sortOrder",
                value: s.to_owned(),
            }),
        }
    }
}

/// Inclusive weight range of lexicon terms considered during matching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightBounds {
    /// Lowest accepted weight
    pub min: f64,
    /// Highest accepted weight
    pub max: f64,
}

impl Default for WeightBounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl WeightBounds {
    /// Accepts every weight.
    pub const UNBOUNDED: Self = Self {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    /// Returns `true` if `weight` lies within `[min, max]`.
    #[inline(always)]
    pub fn contains(&self, weight: f64) -> bool {
        weight >= self.min && weight <= self.max
    }
}

/// Validated configuration for one prediction call.
///
/// Built once at call entry (usually from a loosely typed option record)
/// and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictConfig {
    /// Weighting scheme
    pub encoding: Encoding,
    /// Spelling locale of the input
    pub locale: Locale,
    /// Weight filter on lexicon terms
    pub bounds: WeightBounds,
    /// N-gram sizes to add to the token sequence; empty disables expansion
    pub ngrams: Vec<usize>,
    /// Forces the intercept to zero
    pub no_intercept: bool,
    /// Result view
    pub output: OutputKind,
    /// Decimal places for scores and contributions
    pub places: u8,
    /// Sort key of the ranked match view
    pub sort_by: SortKey,
    /// Sort direction of the ranked match view
    pub sort_order: SortOrder,
    /// Counts n-gram tokens in the word count
    pub wc_grams: bool,
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self {
            encoding: Encoding::default(),
            locale: Locale::default(),
            bounds: WeightBounds::default(),
            ngrams: DEFAULT_NGRAMS.to_vec(),
            no_intercept: false,
            output: OutputKind::default(),
            places: DEFAULT_PLACES,
            sort_by: SortKey::default(),
            sort_order: SortOrder::default(),
            wc_grams: false,
        }
    }
}

impl PredictConfig {
    /// Unigram-only configuration returning the numeric score.
    pub fn unigrams() -> Self {
        Self {
            ngrams: Vec::new(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PredictConfig::default();
        assert_eq!(config.encoding, Encoding::Frequency);
        assert_eq!(config.locale, Locale::Us);
        assert_eq!(config.ngrams, vec![2, 3]);
        assert_eq!(config.output, OutputKind::Lex);
        assert_eq!(config.sort_by, SortKey::Frequency);
        assert_eq!(config.places, DEFAULT_PLACES);
        assert!(!config.no_intercept);
        assert!(!config.wc_grams);
    }

    #[test]
    fn unbounded_accepts_everything() {
        let bounds = WeightBounds::default();
        assert!(bounds.contains(-1e300));
        assert!(bounds.contains(0.0));
        assert!(bounds.contains(1e300));
    }

    #[test]
    fn bounds_are_inclusive() {
        let bounds = WeightBounds { min: 0.0, max: 1.0 };
        assert!(bounds.contains(0.0));
        assert!(bounds.contains(1.0));
        assert!(!bounds.contains(-0.2));
        assert!(!bounds.contains(1.01));
    }

    #[test]
    fn output_parsing() {
        assert_eq!("lex".parse::<OutputKind>(), Ok(OutputKind::Lex));
        assert_eq!("MATCHES".parse::<OutputKind>(), Ok(OutputKind::Matches));
        assert_eq!(" full ".parse::<OutputKind>(), Ok(OutputKind::Full));

        let err = "table".parse::<OutputKind>().unwrap_err();
        assert_eq!(err.option, "output");
        assert_eq!(err.value, "table");
    }

    #[test]
    fn locale_accepts_region_tags() {
        assert_eq!("GB".parse::<Locale>(), Ok(Locale::Gb));
        assert_eq!("en-GB".parse::<Locale>(), Ok(Locale::Gb));
        assert_eq!("en_us".parse::<Locale>(), Ok(Locale::Us));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn sort_key_aliases() {
        assert_eq!("lex".parse::<SortKey>(), Ok(SortKey::Contribution));
        assert_eq!("freq".parse::<SortKey>(), Ok(SortKey::Frequency));
        assert_eq!("weight".parse::<SortKey>(), Ok(SortKey::Weight));
        assert!("alpha".parse::<SortKey>().is_err());
    }

    #[test]
    fn prediction_accessors() {
        let full = Prediction::Full(FullPrediction {
            score: 21.5,
            matches: vec![RankedMatch {
                term: "lol".into(),
                count: 1,
                weight: -0.4,
                contribution: -0.1,
            }],
        });
        assert_eq!(full.score(), Some(21.5));
        assert_eq!(full.matches().map(<[_]>::len), Some(1));

        assert_eq!(Prediction::Score(30.0).matches(), None);
        assert_eq!(Prediction::Matches(Vec::new()).score(), None);
    }
}
