//! Item name normalization.
//!
//! Resolves free-form phrases like "the chicken breasts" to one canonical
//! item identifier using the [`ItemCatalog`].

use std::cmp::Reverse;
use std::sync::Arc;

use chillbox_foundation::ItemId;

use crate::catalog::ItemCatalog;
use crate::tokenizer::InputTokenizer;

/// Result of resolving a phrase against the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The whole phrase is a variant
    Exact(ItemId),
    /// A variant occurs as whole words inside the phrase
    Contained {
        /// The resolved item
        item: ItemId,
        /// The variant that matched
        variant: String,
    },
    /// No variant matches
    NotFound,
}

impl Resolution {
    /// Returns the resolved item, if any.
    #[must_use]
    pub fn item(&self) -> Option<&ItemId> {
        match self {
            Self::Exact(item) | Self::Contained { item, .. } => Some(item),
            Self::NotFound => None,
        }
    }

    /// Consumes the resolution, returning the item if any.
    #[must_use]
    pub fn into_item(self) -> Option<ItemId> {
        match self {
            Self::Exact(item) | Self::Contained { item, .. } => Some(item),
            Self::NotFound => None,
        }
    }
}

/// Resolves phrases to canonical items.
///
/// Matching policy, first hit wins:
/// 1. Exact match of the normalized phrase against a variant.
/// 2. Containment: the longest variant occurring as a contiguous run of whole
///    words. Ties go to the earliest occurrence, then to catalog order.
/// 3. Otherwise [`Resolution::NotFound`]. The normalizer never guesses.
#[derive(Clone, Debug)]
pub struct ItemNormalizer {
    catalog: Arc<ItemCatalog>,
}

impl ItemNormalizer {
    /// Creates a normalizer over a shared catalog.
    #[must_use]
    pub fn new(catalog: Arc<ItemCatalog>) -> Self {
        Self { catalog }
    }

    /// Returns the catalog this normalizer reads.
    #[must_use]
    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// Resolves a raw phrase to a canonical item identifier.
    #[must_use]
    pub fn normalize(&self, phrase: &str) -> Option<ItemId> {
        self.resolve(phrase).into_item()
    }

    /// Resolves a raw phrase, reporting how it matched.
    #[must_use]
    pub fn resolve(&self, phrase: &str) -> Resolution {
        let words = InputTokenizer::tokenize(phrase);
        self.resolve_words(&words)
    }

    /// Resolves an already-tokenized phrase.
    #[must_use]
    pub fn resolve_words(&self, words: &[String]) -> Resolution {
        if words.is_empty() {
            return Resolution::NotFound;
        }

        let phrase = words.join(" ");
        if let Some(item) = self.catalog.lookup_exact(&phrase) {
            return Resolution::Exact(item.clone());
        }

        let best = self
            .catalog
            .variant_entries()
            .iter()
            .filter_map(|entry| find_words(words, &entry.words).map(|start| (entry, start)))
            .min_by_key(|(entry, start)| (Reverse(entry.phrase.len()), *start, entry.order));

        match best {
            Some((entry, _)) => Resolution::Contained {
                item: self.catalog.item_at(entry.item_index).clone(),
                variant: entry.phrase.clone(),
            },
            None => Resolution::NotFound,
        }
    }
}

/// Finds the first position where `needle` occurs as consecutive words.
fn find_words(haystack: &[String], needle: &[String]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
