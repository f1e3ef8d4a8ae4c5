//! Loosely typed options and the merge into [`PredictConfig`].
//!
//! [`Options`] mirrors what callers hand in (JSON objects, CLI flags):
//! every field optional, enumerations as free-form strings. [`Options::resolve`]
//! is the one place where defaults are applied and values validated.
//! Nothing in it fails; bad values fall back to defaults with a warning.

use core::fmt::Debug;
use core::str::FromStr;

use agelex_types::{
    PredictConfig, UnknownValue, WeightBounds, DEFAULT_NGRAMS, DEFAULT_PLACES, MAX_PLACES,
};
use serde::Deserialize;
use smallvec::SmallVec;
use tracing::{debug, warn};

/// Caller-supplied prediction options.
///
/// Field names follow the camelCase JSON convention (`nGrams`, `noInt`,
/// `sortBy`, `wcGrams`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// `"freq"` or `"binary"`
    pub encoding: Option<String>,
    /// `"US"` or `"GB"` (region tags such as `en-GB` accepted)
    pub locale: Option<String>,
    /// Lowest lexicon weight considered
    pub min: Option<f64>,
    /// Highest lexicon weight considered
    pub max: Option<f64>,
    /// N-gram sizes; `[]` or `[0]` disables expansion
    pub n_grams: Option<Vec<usize>>,
    /// Force the intercept to zero
    pub no_int: Option<bool>,
    /// `"lex"`, `"matches"` or `"full"`
    pub output: Option<String>,
    /// Decimal places of scores and contributions
    pub places: Option<u32>,
    /// `"lex"`, `"freq"` or `"weight"`
    pub sort_by: Option<String>,
    /// `"desc"` or `"asc"`
    pub sort_order: Option<String>,
    /// Count n-gram tokens in the word count
    pub wc_grams: Option<bool>,
}

impl Options {
    /// Applies defaults and validation, producing the configuration used
    /// for the rest of the call.
    pub fn resolve(&self) -> PredictConfig {
        PredictConfig {
            encoding: parse_or_default(self.encoding.as_deref()),
            locale: parse_or_default(self.locale.as_deref()),
            bounds: resolve_bounds(self.min, self.max),
            ngrams: resolve_ngrams(self.n_grams.as_deref()),
            no_intercept: self.no_int.unwrap_or(false),
            output: parse_or_default(self.output.as_deref()),
            places: resolve_places(self.places),
            sort_by: parse_or_default(self.sort_by.as_deref()),
            sort_order: parse_or_default(self.sort_order.as_deref()),
            wc_grams: self.wc_grams.unwrap_or(false),
        }
    }
}

fn parse_or_default<T>(raw: Option<&str>) -> T
where
    T: FromStr<Err = UnknownValue> + Default + Debug,
{
    match raw {
        None => T::default(),
        Some(raw) => raw.parse().unwrap_or_else(|err: UnknownValue| {
            let fallback = T::default();
            warn!(option = err.option, value = %err.value, ?fallback, "unrecognized option value, using default");
            fallback
        }),
    }
}

fn resolve_bounds(min: Option<f64>, max: Option<f64>) -> WeightBounds {
    let pick = |name: &str, value: Option<f64>, default: f64| match value {
        Some(v) if v.is_nan() => {
            warn!(option = name, "NaN weight bound ignored");
            default
        }
        Some(v) => v,
        None => default,
    };

    let bounds = WeightBounds {
        min: pick("min", min, f64::NEG_INFINITY),
        max: pick("max", max, f64::INFINITY),
    };

    if bounds.min > bounds.max {
        warn!(min = bounds.min, max = bounds.max, "min exceeds max, weight filter disabled");
        return WeightBounds::UNBOUNDED;
    }
    bounds
}

fn resolve_ngrams(sizes: Option<&[usize]>) -> Vec<usize> {
    let Some(sizes) = sizes else {
        return DEFAULT_NGRAMS.to_vec();
    };

    let mut out: SmallVec<[usize; 4]> = SmallVec::new();
    for &n in sizes {
        match n {
            0 => {}
            1 => debug!("n-gram size 1 ignored, words are always counted"),
            n if out.contains(&n) => {}
            n => out.push(n),
        }
    }
    out.into_vec()
}

fn resolve_places(places: Option<u32>) -> u8 {
    match places {
        None => DEFAULT_PLACES,
        Some(p) if p > u32::from(MAX_PLACES) => {
            warn!(places = p, max = MAX_PLACES, "places clamped");
            MAX_PLACES
        }
        Some(p) => p as u8,
    }
}
