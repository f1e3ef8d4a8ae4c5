//! The weighted term lexicon.
//!
//! A lexicon maps terms (single words or space-joined n-grams) to
//! regression weights, plus the intercept of the linear model. It is
//! loaded once at start-up and only read afterwards, so one instance can
//! be shared by reference across threads.
//!
//! ## File format
//!
//! JSON, either flat:
//!
//! ```json
//! { "_intercept": 23.2188604687, "lol": -0.61, "my wife": 0.95 }
//! ```
//!
//! or grouped by category, from which one category is selected:
//!
//! ```json
//! { "AGE": { "_intercept": 23.2188604687, "lol": -0.61 } }
//! ```
//!
//! Entry order is preserved; it is the tie-break order of ranked matches.

use std::fmt;
use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use tracing::debug;

use crate::error::LoadError;

/// Intercept of the published age model, used when a lexicon file does
/// not carry its own.
pub const AGE_INTERCEPT: f64 = 23.2188604687;

/// Category read from grouped lexicon files by default.
pub const DEFAULT_CATEGORY: &str = "AGE";

/// Reserved key holding the intercept inside a lexicon table.
pub const INTERCEPT_KEY: &str = "_intercept";

/// A single weighted term.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconEntry {
    /// Term text
    pub term: Box<str>,
    /// Regression weight
    pub weight: f64,
}

/// Immutable term → weight table with an intercept.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    index: FxHashMap<Box<str>, usize>,
    intercept: f64,
}

impl Lexicon {
    /// Builds a lexicon from `(term, weight)` pairs, in order.
    ///
    /// A repeated term keeps its first position and takes the later weight.
    pub fn from_entries<I, S>(entries: I, intercept: f64) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<Box<str>>,
    {
        let iter = entries.into_iter();
        let (lower, _) = iter.size_hint();

        let mut lexicon = Self {
            entries: Vec::with_capacity(lower),
            index: FxHashMap::default(),
            intercept,
        };
        lexicon.index.reserve(lower);

        for (term, weight) in iter {
            lexicon.insert(term.into(), weight);
        }

        lexicon
    }

    fn insert(&mut self, term: Box<str>, weight: f64) {
        if let Some(&slot) = self.index.get(&term) {
            debug!(term = %term, weight, "duplicate lexicon term, keeping later weight");
            self.entries[slot].weight = weight;
            return;
        }

        self.index.insert(term.clone(), self.entries.len());
        self.entries.push(LexiconEntry { term, weight });
    }

    /// Parses a lexicon from JSON, selecting `category` from grouped files.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Json` for malformed input,
    /// `LoadError::UnknownCategory` if a grouped file lacks `category`, and
    /// `LoadError::Empty` if no terms remain.
    pub fn from_json_str(json: &str, category: &str) -> Result<Self, LoadError> {
        let table = match serde_json::from_str::<LexiconFile>(json)? {
            LexiconFile::Flat(table) => table,
            LexiconFile::Grouped(mut groups) => groups
                .remove(category)
                .ok_or_else(|| LoadError::UnknownCategory(category.to_owned()))?,
        };

        let intercept = table.intercept.unwrap_or(AGE_INTERCEPT);
        let lexicon = Self::from_entries(table.terms, intercept);
        if lexicon.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(lexicon)
    }

    /// Reads and parses a lexicon file.
    pub fn from_path(path: impl AsRef<Path>, category: &str) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_json_str(&json, category)?;
        debug!(
            path = %path.display(),
            category,
            terms = lexicon.len(),
            intercept = lexicon.intercept,
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Replaces the intercept.
    #[must_use]
    pub fn with_intercept(mut self, intercept: f64) -> Self {
        self.intercept = intercept;
        self
    }

    /// Intercept of the linear model.
    #[inline(always)]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Weight of `term`, if present.
    #[inline]
    pub fn weight(&self, term: &str) -> Option<f64> {
        self.index.get(term).map(|&slot| self.entries[slot].weight)
    }

    /// Entries in file order.
    #[inline]
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Number of terms.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the lexicon has no terms.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum LexiconFile {
    Flat(RawTable),
    Grouped(FxHashMap<String, RawTable>),
}

/// One term table, in document order.
struct RawTable {
    terms: Vec<(String, f64)>,
    intercept: Option<f64>,
}

impl<'de> Deserialize<'de> for RawTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = RawTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of terms to numeric weights")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawTable, A::Error> {
                let mut terms = Vec::with_capacity(map.size_hint().unwrap_or(0));
                let mut intercept = None;

                while let Some((term, weight)) = map.next_entry::<String, f64>()? {
                    if !weight.is_finite() {
                        return Err(de::Error::custom(format_args!(
                            "non-finite weight for term {term:?}"
                        )));
                    }
                    if term == INTERCEPT_KEY {
                        intercept = Some(weight);
                    } else {
                        terms.push((term, weight));
                    }
                }

                Ok(RawTable { terms, intercept })
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
