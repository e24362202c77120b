//! Main interpretation pipeline.
//!
//! Orchestrates the flow from a raw transcript to a typed [`Operation`].
//! Interpretation is a pure function of the transcript text.

use std::num::NonZeroU32;
use std::sync::Arc;

use chillbox_foundation::{ItemId, MAX_QUANTITY};

use crate::catalog::ItemCatalog;
use crate::command::{Operation, ParseFailureKind};
use crate::normalizer::{ItemNormalizer, Resolution};
use crate::quantity::QuantityParser;
use crate::tokenizer::InputTokenizer;
use crate::vocabulary::{Verb, VocabularyRegistry};

/// Turns transcripts into operations.
#[derive(Clone, Debug)]
pub struct CommandInterpreter {
    vocabulary: VocabularyRegistry,
    normalizer: ItemNormalizer,
}

impl CommandInterpreter {
    /// Creates an interpreter with the standard vocabulary.
    #[must_use]
    pub fn new(catalog: Arc<ItemCatalog>) -> Self {
        Self::with_vocabulary(catalog, VocabularyRegistry::standard())
    }

    /// Creates an interpreter with a custom vocabulary.
    #[must_use]
    pub fn with_vocabulary(catalog: Arc<ItemCatalog>, vocabulary: VocabularyRegistry) -> Self {
        Self {
            vocabulary,
            normalizer: ItemNormalizer::new(catalog),
        }
    }

    /// Gets a reference to the vocabulary registry.
    #[must_use]
    pub fn vocabulary(&self) -> &VocabularyRegistry {
        &self.vocabulary
    }

    /// Gets a reference to the item normalizer.
    #[must_use]
    pub fn normalizer(&self) -> &ItemNormalizer {
        &self.normalizer
    }

    /// Interprets a transcript.
    ///
    /// Patterns are tried in order:
    /// - an undo phrase (whole transcript) → [`Operation::Undo`]
    /// - `set <phrase> to <quantity>` (or `set <phrase> <quantity>`)
    /// - `remove <quantity>? of? <phrase>` (or `remove <phrase> <quantity>`)
    /// - `add <quantity>? of? <phrase>` (or `add <phrase> <quantity>`)
    ///
    /// Anything else is [`ParseFailureKind::UnknownVerb`]. Quantities are
    /// validated before the item phrase is resolved.
    #[must_use]
    pub fn interpret(&self, transcript: &str) -> Operation {
        let words = InputTokenizer::tokenize(transcript);
        let op = self.interpret_words(&words);
        tracing::debug!(transcript, operation = %op, "interpreted transcript");
        op
    }

    fn interpret_words(&self, words: &[String]) -> Operation {
        let Some((first, rest)) = words.split_first() else {
            return Operation::Unrecognized(ParseFailureKind::Empty);
        };

        if self.vocabulary.is_undo(&words.join(" ")) {
            return Operation::Undo;
        }

        match self.vocabulary.lookup_verb(first) {
            Some(Verb::Set) => self.interpret_set(rest),
            Some(verb @ (Verb::Add | Verb::Remove)) => self.interpret_count(verb, rest),
            None => Operation::Unrecognized(ParseFailureKind::UnknownVerb),
        }
    }

    /// `set <phrase> to <quantity>`, falling back to `set <phrase> <quantity>`.
    fn interpret_set(&self, rest: &[String]) -> Operation {
        let Some((phrase, quantity)) = split_set(rest) else {
            return Operation::Unrecognized(ParseFailureKind::MissingQuantity);
        };

        let Some(quantity) = bounded(quantity) else {
            return Operation::Unrecognized(ParseFailureKind::InvalidQuantity);
        };

        match self.resolve(phrase) {
            Some(item) => Operation::Set { item, quantity },
            None => Operation::Unrecognized(ParseFailureKind::UnknownItem),
        }
    }

    /// `add|remove <quantity>? of? <phrase>`, or `add|remove <phrase> <quantity>`.
    ///
    /// The quantity defaults to one. A numeral left over once the quantity
    /// and the item variant are taken is [`ParseFailureKind::InvalidQuantity`].
    fn interpret_count(&self, verb: Verb, rest: &[String]) -> Operation {
        let (quantity, mut phrase) = match QuantityParser::leading(rest) {
            Some((value, consumed)) => (value, &rest[consumed..]),
            None => trailing_quantity(rest).unwrap_or((1, rest)),
        };
        if phrase.first().map(String::as_str) == Some("of") {
            phrase = &phrase[1..];
        }

        let Some(quantity) = bounded(quantity).and_then(NonZeroU32::new) else {
            return Operation::Unrecognized(ParseFailureKind::InvalidQuantity);
        };

        let resolution = self.normalizer.resolve_words(phrase);
        if leftover_numeral(phrase, &resolution) {
            return Operation::Unrecognized(ParseFailureKind::InvalidQuantity);
        }
        let Some(item) = resolution.into_item() else {
            return Operation::Unrecognized(ParseFailureKind::UnknownItem);
        };

        match verb {
            Verb::Add => Operation::Add { item, quantity },
            Verb::Remove | Verb::Set => Operation::Remove { item, quantity },
        }
    }

    fn resolve(&self, phrase: &[String]) -> Option<ItemId> {
        self.normalizer.resolve_words(phrase).into_item()
    }
}

/// Splits the words after `set` into the item phrase and the stated quantity.
///
/// Prefers the last `to` followed by a quantity; otherwise accepts a
/// quantity that runs to the end of the transcript.
fn split_set(rest: &[String]) -> Option<(&[String], u64)> {
    let after_to = rest
        .iter()
        .enumerate()
        .rev()
        .filter(|(idx, word)| *idx > 0 && word.as_str() == "to")
        .find_map(|(idx, _)| {
            QuantityParser::leading(&rest[idx + 1..]).map(|(value, _)| (&rest[..idx], value))
        });
    if after_to.is_some() {
        return after_to;
    }

    (1..rest.len()).find_map(|start| match QuantityParser::leading(&rest[start..]) {
        Some((value, consumed)) if start + consumed == rest.len() => Some((&rest[..start], value)),
        _ => None,
    })
}

/// A quantity that runs to the end of the words: `steak 3`, `nuggets a dozen`.
fn trailing_quantity(rest: &[String]) -> Option<(u64, &[String])> {
    (1..rest.len()).find_map(|start| match QuantityParser::leading(&rest[start..]) {
        Some(_) if matches!(&rest[start..], [word] if word == "a" || word == "an") => None,
        Some((value, consumed)) if start + consumed == rest.len() => Some((value, &rest[..start])),
        _ => None,
    })
}

/// Whether the phrase holds a numeral outside the variant that resolved it.
fn leftover_numeral(phrase: &[String], resolution: &Resolution) -> bool {
    let variant: Vec<&str> = match resolution {
        Resolution::Exact(_) => return false,
        Resolution::Contained { variant, .. } => variant.split(' ').collect(),
        Resolution::NotFound => Vec::new(),
    };
    phrase
        .iter()
        .any(|word| QuantityParser::is_numeral(word) && !variant.contains(&word.as_str()))
}

fn bounded(value: u64) -> Option<u32> {
    u32::try_from(value)
        .ok()
        .filter(|&quantity| quantity <= MAX_QUANTITY)
}
