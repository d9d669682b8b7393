//! Capitalization repair for translated text.
//!
//! Some translation backends return whole sentences in capitals. This pass
//! rewrites any sentence that is entirely uppercase to sentence case and
//! leaves everything else untouched.

use regex::Regex;

/// Sentence-level capitalization normalizer.
///
/// A sentence boundary sits immediately after a `.`, `!`, or `?` that is
/// followed by whitespace. The whitespace between sentences is copied
/// through verbatim, so line and paragraph breaks survive normalization.
pub struct CapitalizationNormalizer {
    boundary: Regex,
}

impl CapitalizationNormalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Self {
            boundary: Regex::new(r"[.!?]\s+").unwrap(),
        }
    }

    /// Repair all-caps sentences in `text`.
    ///
    /// Each sentence shorter than 2 characters, or not equal to its own
    /// uppercase transform, passes through unchanged. An all-caps sentence
    /// is rewritten to sentence case: first character uppercased, the rest
    /// lowercased. Applying the transform twice yields the same output.
    ///
    /// # Example
    ///
    /// ```
    /// use rebind::CapitalizationNormalizer;
    ///
    /// let normalizer = CapitalizationNormalizer::new();
    /// assert_eq!(
    ///     normalizer.normalize("HELLO WORLD. This is fine."),
    ///     "Hello world. This is fine."
    /// );
    /// ```
    pub fn normalize(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut start = 0;

        for m in self.boundary.find_iter(text) {
            // The terminator is a single ASCII byte; the sentence ends
            // right after it and the matched whitespace is the separator.
            let split = m.start() + 1;
            push_sentence(&mut result, &text[start..split]);
            result.push_str(&text[split..m.end()]);
            start = m.end();
        }
        push_sentence(&mut result, &text[start..]);

        result
    }
}

impl Default for CapitalizationNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Repair all-caps sentences with a one-off normalizer.
pub fn normalize_capitalization(text: &str) -> String {
    CapitalizationNormalizer::new().normalize(text)
}

fn push_sentence(out: &mut String, sentence: &str) {
    if sentence.chars().nth(1).is_none() {
        out.push_str(sentence);
        return;
    }
    if sentence != sentence.to_uppercase() {
        out.push_str(sentence);
        return;
    }

    let mut chars = sentence.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}
