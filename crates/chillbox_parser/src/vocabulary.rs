//! Vocabulary registry for command verbs.
//!
//! Stores the words that start each command and the whole-transcript
//! phrases that mean undo.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::stdlib;
use crate::tokenizer::InputTokenizer;

/// A mutating command verb.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Increase stock
    Add,
    /// Decrease stock
    Remove,
    /// Overwrite stock
    Set,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Remove => write!(f, "remove"),
            Self::Set => write!(f, "set"),
        }
    }
}

/// Runtime storage for verb words and undo phrases.
#[derive(Clone, Debug, Default)]
pub struct VocabularyRegistry {
    /// Word -> verb mapping
    verbs: HashMap<String, Verb>,
    /// Normalized whole-transcript undo phrases
    undo_phrases: HashSet<String>,
}

impl VocabularyRegistry {
    /// Creates a new empty vocabulary registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the standard English vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        let mut vocab = Self::new();
        for (words, verb) in [
            (stdlib::ADD_VERBS, Verb::Add),
            (stdlib::REMOVE_VERBS, Verb::Remove),
            (stdlib::SET_VERBS, Verb::Set),
        ] {
            for word in words {
                vocab.register_verb(word, verb);
            }
        }
        for phrase in stdlib::UNDO_PHRASES {
            vocab.register_undo_phrase(phrase);
        }
        vocab
    }

    /// Registers a word as a synonym for a verb.
    pub fn register_verb(&mut self, word: &str, verb: Verb) {
        self.verbs.insert(word.to_lowercase(), verb);
    }

    /// Looks up a verb by word.
    #[must_use]
    pub fn lookup_verb(&self, word: &str) -> Option<Verb> {
        self.verbs.get(word).copied()
    }

    /// Registers a whole-transcript undo phrase.
    pub fn register_undo_phrase(&mut self, phrase: &str) {
        let phrase = InputTokenizer::normalize_phrase(phrase);
        if !phrase.is_empty() {
            self.undo_phrases.insert(phrase);
        }
    }

    /// Checks if a normalized transcript is an undo phrase.
    #[must_use]
    pub fn is_undo(&self, normalized: &str) -> bool {
        self.undo_phrases.contains(normalized)
    }

    /// Returns all verb words, sorted.
    #[must_use]
    pub fn verb_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.verbs.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}
