//! Transcript tokenization.
//!
//! Converts raw transcribed text into a stream of lowercase words.

/// Tokenizes transcripts and phrases.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw transcript into lowercase words.
    ///
    /// - Converts words to lowercase
    /// - Splits on any whitespace, so runs of spaces collapse
    /// - Strips sentence punctuation; hyphens are kept (`t-bone`)
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current_word = String::new();

        for ch in input.chars() {
            match ch {
                c if c.is_whitespace() => {
                    if !current_word.is_empty() {
                        tokens.push(current_word.to_lowercase());
                        current_word.clear();
                    }
                }
                // Punctuation to strip
                '.' | ',' | '!' | '?' | ';' | ':' | '\'' | '"' | '\u{2019}' => {}
                _ => current_word.push(ch),
            }
        }

        if !current_word.is_empty() {
            tokens.push(current_word.to_lowercase());
        }

        tokens
    }

    /// Lowercases and whitespace-collapses a phrase.
    ///
    /// Two phrases that differ only in case, spacing or punctuation
    /// normalize to the same string.
    #[must_use]
    pub fn normalize_phrase(input: &str) -> String {
        Self::tokenize(input).join(" ")
    }
}
