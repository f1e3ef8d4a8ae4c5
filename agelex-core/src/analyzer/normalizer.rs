/// Lowercasing, whitespace-trimming text normalizer.
///
/// Performs the following operations:
/// - Converts all characters to lowercase (Unicode-aware, ASCII fast path)
/// - Collapses runs of whitespace into single spaces
/// - Removes leading and trailing whitespace
///
/// The output satisfies the tokenizer's input contract: no leading,
/// trailing or consecutive spaces.
///
/// # Examples
///
/// ```
/// use agelex_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("  I am HAPPY  "), Some("i am happy".to_string()));
/// assert_eq!(normalizer.normalize(" \t\n"), None);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let mut pending_space = false;

        for ch in input.chars() {
            if ch.is_whitespace() {
                pending_space = !out.is_empty();
                continue;
            }

            if pending_space {
                out.push(' ');
                pending_space = false;
            }

            if ch.is_ascii() {
                out.push(ch.to_ascii_lowercase());
            } else {
                out.extend(ch.to_lowercase());
            }
        }
    }

    /// Normalizes text and returns it, or `None` if nothing but
    /// whitespace remains.
    #[inline]
    pub fn normalize(&self, input: &str) -> Option<String> {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        if out.is_empty() {
            None
        } else {
            Some(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &str) -> String {
        TextNormalizer::new().normalize(input).unwrap_or_default()
    }

    #[test]
    fn ascii_basic_lowercase() {
        assert_eq!(norm("HELLO"), "hello");
        assert_eq!(norm("HeLlO"), "hello");
        assert_eq!(norm("123 ABC!"), "123 abc!");
    }

    #[test]
    fn whitespace_collapse() {
        assert_eq!(norm("hello   world"), "hello world");
        assert_eq!(norm("hello\t\nworld"), "hello world");
        assert_eq!(norm("hello \r\n world"), "hello world");
    }

    #[test]
    fn leading_and_trailing_whitespace_removed() {
        assert_eq!(norm("   hello"), "hello");
        assert_eq!(norm("hello   "), "hello");
        assert_eq!(norm("\n hello world \t"), "hello world");
    }

    #[test]
    fn empty_and_whitespace_only_are_none() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize(""), None);
        assert_eq!(n.normalize(" "), None);
        assert_eq!(n.normalize(" \t\n\r "), None);
        assert_eq!(n.normalize("\u{00A0}\u{2003}"), None);
    }

    #[test]
    fn no_double_spaces() {
        let out = norm("hello   world  test");
        assert!(!out.contains("  "));
    }

    #[test]
    fn unicode_lowercase() {
        assert_eq!(norm("ПРИВЕТ"), "привет");
        assert_eq!(norm("ÜBER Café"), "über café");
        assert_eq!(norm("ΆΈΉ"), "άέή");
    }

    #[test]
    fn expanding_lowercase_is_valid_utf8() {
        let result = norm("İstanbul");
        assert!(std::str::from_utf8(result.as_bytes()).is_ok());
        assert!(result.ends_with("stanbul"));
    }

    #[test]
    fn punctuation_and_emoji_passthrough() {
        assert_eq!(norm("Wow!! :) 🌍"), "wow!! :) 🌍");
    }

    #[test]
    fn idempotent() {
        let n = TextNormalizer::new();
        let samples = ["I am Happy", "  foo   BAR\tbaz ", "ÜBER Café", "x"];

        for s in samples {
            let once = n.normalize(s).unwrap();
            let twice = n.normalize(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn normalize_into_reuses_capacity() {
        let normalizer = TextNormalizer::new();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        normalizer.normalize_into("HELLO", &mut buf);
        assert_eq!(buf, "hello");
        assert_eq!(buf.capacity(), cap);

        normalizer.normalize_into("WORLD", &mut buf);
        assert_eq!(buf, "world");
        assert_eq!(buf.capacity(), cap);
    }
}
