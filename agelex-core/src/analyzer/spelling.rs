//! British to American spelling normalization.
//!
//! The lexicon uses American spelling, so British input ("colour",
//! "favourite") is rewritten before tokenization when the caller marks
//! the text as `GB`. The word list itself is supplied from outside.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::LoadError;

/// Rewrites the spelling of normalized text.
pub trait SpellingTranslator {
    /// Returns `text` with spellings rewritten. Input and output follow
    /// the normalizer contract (lowercase, single spaces).
    fn translate(&self, text: &str) -> String;
}

/// Leaves text untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentitySpelling;

impl SpellingTranslator for IdentitySpelling {
    #[inline]
    fn translate(&self, text: &str) -> String {
        text.to_owned()
    }
}

/// Word-for-word replacement table.
///
/// Lookups ignore surrounding ASCII punctuation, which is kept in place:
/// `"colour,"` becomes `"color,"`.
///
/// # Example
///
/// ```
/// use agelex_core::analyzer::spelling::{SpellingTable, SpellingTranslator};
///
/// let table = SpellingTable::from_pairs([("colour", "color"), ("mum", "mom")]);
/// assert_eq!(table.translate("my mum's colour, mum"), "my mum's color, mom");
/// ```
#[derive(Debug, Default, Clone)]
pub struct SpellingTable {
    words: FxHashMap<String, String>,
}

impl SpellingTable {
    /// Builds a table from `(british, american)` pairs. Keys are lowercased.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let words = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
            .collect();
        Self { words }
    }

    /// Parses a JSON object of `{"british": "american"}` pairs.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let raw: FxHashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::from_pairs(raw))
    }

    /// Reads a JSON replacement table from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&json)?;
        debug!(path = %path.display(), entries = table.len(), "loaded spelling table");
        Ok(table)
    }

    /// Number of replacement pairs.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the table has no pairs.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellingTranslator for SpellingTable {
    fn translate(&self, text: &str) -> String {
        if self.words.is_empty() {
            return text.to_owned();
        }

        let mut out = String::with_capacity(text.len());
        for (i, run) in text.split(' ').enumerate() {
            if i > 0 {
                out.push(' ');
            }

            let head = run.trim_start_matches(|c: char| c.is_ascii_punctuation());
            let core = head.trim_end_matches(|c: char| c.is_ascii_punctuation());
            match self.words.get(core) {
                Some(american) if !core.is_empty() => {
                    let lead = run.len() - head.len();
                    out.push_str(&run[..lead]);
                    out.push_str(american);
                    out.push_str(&run[lead + core.len()..]);
                }
                _ => out.push_str(run),
            }
        }
        out
    }
}
