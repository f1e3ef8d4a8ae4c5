//! Matching and scoring.
//!
//! Turns a token sequence into a score in three steps:
//! - **Frequency**: count each distinct token once
//! - **Matcher**: intersect the counts with the lexicon
//! - **Scorer**: aggregate matches into a score or a ranked list

mod frequency;
mod matcher;
mod scorer;

pub use frequency::FrequencyTable;
pub use matcher::find_matches;
pub use scorer::{rank, round_to, score, whole_years, Aggregation};
