//! Author age estimation from word usage.
//!
//! Text is normalized, tokenized, expanded with word n-grams and counted;
//! the counts are matched against a weighted [`Lexicon`] and combined by a
//! linear model: `intercept + Σ (count / wordcount) * weight`.
//!
//! ```
//! use agelex_core::{AgePredictor, Lexicon, PredictConfig};
//!
//! let lexicon = Lexicon::from_entries([("happy", 0.5), ("sad good", -0.2)], 10.0);
//! let age = AgePredictor::new(&lexicon)
//!     .predict("sad good", &PredictConfig::default())
//!     .and_then(|p| p.score());
//! assert_eq!(age, Some(9.9));
//! ```

pub mod analyzer;
pub mod error;
pub mod lexicon;
pub mod options;
pub mod predictor;
pub mod scoring;

pub use agelex_types::{
    Encoding, FullPrediction, Locale, MatchRecord, OutputKind, PredictConfig, Prediction,
    RankedMatch, SortKey, SortOrder, WeightBounds,
};
pub use error::{LoadError, ScoreError};
pub use lexicon::Lexicon;
pub use options::Options;
pub use predictor::{predict_age, AgePredictor};
