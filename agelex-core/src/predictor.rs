//! Prediction entry points.
//!
//! Each call runs the full pipeline on its own data:
//! normalize → (spelling) → tokenize → expand → count → match → score.
//! The only shared state is the borrowed, read-only [`Lexicon`], so a
//! predictor can be used from any number of threads at once.

use agelex_types::{FullPrediction, Locale, OutputKind, PredictConfig, Prediction, RankedMatch};
use rayon::prelude::*;
use tracing::debug;

use crate::analyzer::ngram;
use crate::analyzer::{IdentitySpelling, SpellingTranslator, TextNormalizer, Tokenize, WordTokenizer};
use crate::error::ScoreError;
use crate::lexicon::Lexicon;
use crate::options::Options;
use crate::scoring::{self, Aggregation, FrequencyTable};

/// Estimates author age from text against one lexicon.
///
/// # Example
///
/// ```
/// use agelex_core::{AgePredictor, Lexicon, PredictConfig, Prediction};
///
/// let lexicon = Lexicon::from_entries([("happy", 0.5), ("sad good", -0.2)], 10.0);
/// let predictor = AgePredictor::new(&lexicon);
///
/// let result = predictor.predict("I am happy happy today", &PredictConfig::unigrams());
/// assert_eq!(result, Some(Prediction::Score(10.2)));
/// ```
#[derive(Debug, Clone)]
pub struct AgePredictor<'l, T = WordTokenizer, S = IdentitySpelling> {
    lexicon: &'l Lexicon,
    normalizer: TextNormalizer,
    tokenizer: T,
    translator: S,
}

impl<'l> AgePredictor<'l> {
    /// Creates a predictor with the built-in tokenizer and no spelling
    /// translation.
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Self {
            lexicon,
            normalizer: TextNormalizer::new(),
            tokenizer: WordTokenizer::new(),
            translator: IdentitySpelling,
        }
    }
}

impl<'l, T, S> AgePredictor<'l, T, S> {
    /// Replaces the tokenizer.
    pub fn with_tokenizer<U: Tokenize>(self, tokenizer: U) -> AgePredictor<'l, U, S> {
        AgePredictor {
            lexicon: self.lexicon,
            normalizer: self.normalizer,
            tokenizer,
            translator: self.translator,
        }
    }

    /// Replaces the spelling translator used for `GB` text.
    pub fn with_translator<U: SpellingTranslator>(self, translator: U) -> AgePredictor<'l, T, U> {
        AgePredictor {
            lexicon: self.lexicon,
            normalizer: self.normalizer,
            tokenizer: self.tokenizer,
            translator,
        }
    }

    /// The lexicon this predictor scores against.
    #[inline(always)]
    pub fn lexicon(&self) -> &'l Lexicon {
        self.lexicon
    }
}

impl<T: Tokenize, S: SpellingTranslator> AgePredictor<'_, T, S> {
    /// Resolves `options` and predicts.
    pub fn predict_with(&self, text: &str, options: &Options) -> Option<Prediction> {
        self.predict(text, &options.resolve())
    }

    /// Runs the pipeline on `text`.
    ///
    /// Returns `None` when the text is empty, whitespace only, or yields
    /// no tokens.
    pub fn predict(&self, text: &str, config: &PredictConfig) -> Option<Prediction> {
        let Some(mut normalized) = self.normalizer.normalize(text) else {
            debug!("empty input");
            return None;
        };

        if config.locale == Locale::Gb {
            normalized = self.translator.translate(&normalized);
        }

        let mut tokens = self.tokenizer.tokenize(&normalized);
        if tokens.is_empty() {
            debug!("tokenizer produced no tokens");
            return None;
        }

        let words = tokens.len();
        let grams = ngram::expand(&tokens, &config.ngrams);
        tokens.extend(grams);

        let word_count = if config.wc_grams { tokens.len() } else { words };
        let table = FrequencyTable::from_tokens(&tokens);
        let matches = scoring::find_matches(self.lexicon, &table, config.bounds);

        debug!(
            words,
            tokens = tokens.len(),
            distinct = table.distinct(),
            matches = matches.len(),
            word_count,
            "matched tokens against lexicon"
        );

        let intercept = if config.no_intercept {
            0.0
        } else {
            self.lexicon.intercept()
        };
        let agg = Aggregation {
            encoding: config.encoding,
            word_count,
            places: config.places,
        };

        let result = match config.output {
            OutputKind::Lex => scoring::score(&matches, intercept, agg).map(Prediction::Score),
            OutputKind::Matches => {
                scoring::rank(&matches, agg, config.sort_by, config.sort_order).map(Prediction::Matches)
            }
            OutputKind::Full => {
                let (score, ranked) = rayon::join(
                    || scoring::score(&matches, intercept, agg),
                    || scoring::rank(&matches, agg, config.sort_by, config.sort_order),
                );
                combine(score, ranked)
            }
        };

        result
            .inspect_err(|err| debug!(%err, "no prediction"))
            .ok()
    }
}

impl<T, S> AgePredictor<'_, T, S>
where
    T: Tokenize + Sync,
    S: SpellingTranslator + Sync,
{
    /// Predicts each text independently, in parallel. Results keep the
    /// order of `texts`.
    pub fn predict_batch<I>(&self, texts: &[I], config: &PredictConfig) -> Vec<Option<Prediction>>
    where
        I: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.predict(text.as_ref(), config))
            .collect()
    }
}

fn combine(
    score: Result<f64, ScoreError>,
    matches: Result<Vec<RankedMatch>, ScoreError>,
) -> Result<Prediction, ScoreError> {
    Ok(Prediction::Full(FullPrediction {
        score: score?,
        matches: matches?,
    }))
}

/// One-shot prediction with the built-in tokenizer.
///
/// ```
/// use agelex_core::{predict_age, Lexicon, Options};
///
/// let lexicon = Lexicon::from_entries([("happy", 0.5)], 10.0);
/// let score = predict_age(&lexicon, "happy days", &Options::default());
/// assert!(score.is_some());
/// assert_eq!(predict_age(&lexicon, "   ", &Options::default()), None);
/// ```
pub fn predict_age(lexicon: &Lexicon, text: &str, options: &Options) -> Option<Prediction> {
    AgePredictor::new(lexicon).predict_with(text, options)
}
