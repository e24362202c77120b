//! Canonical item catalog.
//!
//! Maps canonical item identifiers to the phrases people actually say.
//! A catalog is built once at startup and is read-only afterwards; share it
//! behind an `Arc`.

use std::collections::HashMap;

use chillbox_foundation::{Error, ItemId, Result};

use crate::stdlib;
use crate::tokenizer::InputTokenizer;

/// One canonical item and its recognized variant phrases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalItem {
    /// Canonical identifier
    pub id: ItemId,
    /// Normalized variant phrases, display name first
    pub variants: Vec<String>,
}

/// A variant phrase prepared for containment matching.
#[derive(Clone, Debug)]
pub(crate) struct VariantEntry {
    /// Normalized phrase
    pub phrase: String,
    /// Phrase split into words
    pub words: Vec<String>,
    /// Index of the owning item in catalog order
    pub item_index: usize,
    /// Registration order across the whole catalog
    pub order: usize,
}

/// Immutable mapping from variant phrase to canonical item.
///
/// Invariant: every variant phrase belongs to exactly one canonical item.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    items: Vec<CanonicalItem>,
    by_variant: HashMap<String, usize>,
    variants: Vec<VariantEntry>,
}

impl ItemCatalog {
    /// Starts an empty catalog builder.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Builds the standard freezer catalog.
    ///
    /// # Errors
    ///
    /// Returns an error only if the standard tables contradict themselves.
    pub fn standard() -> Result<Self> {
        Ok(CatalogBuilder::standard()?.build())
    }

    /// Looks up a normalized phrase exactly.
    #[must_use]
    pub fn lookup_exact(&self, phrase: &str) -> Option<&ItemId> {
        self.by_variant.get(phrase).map(|&idx| &self.items[idx].id)
    }

    /// Gets an item by identifier.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&CanonicalItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Returns true if the identifier is in the catalog.
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates over items in registration order.
    pub fn items(&self) -> impl Iterator<Item = &CanonicalItem> {
        self.items.iter()
    }

    /// Returns the number of canonical items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of distinct variant phrases.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    pub(crate) fn variant_entries(&self) -> &[VariantEntry] {
        &self.variants
    }

    pub(crate) fn item_at(&self, index: usize) -> &ItemId {
        &self.items[index].id
    }
}

/// Accumulates items and checks variant uniqueness.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: ItemCatalog,
}

impl CatalogBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-loaded with the standard freezer items.
    ///
    /// # Errors
    ///
    /// Returns an error if the standard tables contain a malformed identifier
    /// or a duplicate variant.
    pub fn standard() -> Result<Self> {
        let mut builder = Self::new();
        for (id, variants) in stdlib::ITEMS {
            builder.add_item(ItemId::new(id)?, variants.iter().copied())?;
        }
        Ok(builder)
    }

    /// Registers an item with its variant phrases.
    ///
    /// Phrases are normalized (case, whitespace, punctuation) before storage.
    /// The identifier's display name is always registered as the first variant.
    /// Registering an existing identifier again extends its variants.
    ///
    /// # Errors
    ///
    /// Returns [`chillbox_foundation::ErrorKind::DuplicateVariant`] if any
    /// phrase already belongs to a different item. The builder is left
    /// unchanged in that case.
    pub fn add_item<I, S>(&mut self, id: ItemId, variants: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut phrases = vec![InputTokenizer::normalize_phrase(&id.display_name())];
        for variant in variants {
            let phrase = InputTokenizer::normalize_phrase(variant.as_ref());
            if !phrase.is_empty() && !phrases.contains(&phrase) {
                phrases.push(phrase);
            }
        }

        let item_index = self
            .catalog
            .items
            .iter()
            .position(|item| item.id == id)
            .unwrap_or(self.catalog.items.len());

        // Validate everything before mutating
        for phrase in &phrases {
            if let Some(&owner) = self.catalog.by_variant.get(phrase) {
                if owner != item_index {
                    return Err(Error::duplicate_variant(
                        phrase.clone(),
                        self.catalog.items[owner].id.as_str(),
                        id.as_str(),
                    ));
                }
            }
        }

        if item_index == self.catalog.items.len() {
            self.catalog.items.push(CanonicalItem {
                id,
                variants: Vec::new(),
            });
        }

        for phrase in phrases {
            if self.catalog.by_variant.contains_key(&phrase) {
                continue;
            }
            let order = self.catalog.variants.len();
            self.catalog.by_variant.insert(phrase.clone(), item_index);
            self.catalog.variants.push(VariantEntry {
                words: phrase.split(' ').map(str::to_string).collect(),
                phrase: phrase.clone(),
                item_index,
                order,
            });
            self.catalog.items[item_index].variants.push(phrase);
        }

        Ok(self)
    }

    /// Finishes the catalog.
    #[must_use]
    pub fn build(self) -> ItemCatalog {
        tracing::debug!(
            items = self.catalog.len(),
            variants = self.catalog.variant_count(),
            "item catalog built"
        );
        self.catalog
    }
}
