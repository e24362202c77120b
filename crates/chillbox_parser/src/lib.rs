//! Transcript interpretation for Chillbox.
//!
//! This crate turns a transcribed utterance like "add 2 of chicken breast"
//! into a typed [`Operation`] that the inventory controller can apply.
//! It never touches storage.
//!
//! # Architecture
//!
//! ```text
//! "Add two of the chicken breasts."
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["add", "two", "of", "the", "chicken", "breasts"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → Verb::Add
//! │ LOOKUP          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ QUANTITY        │  → 2 (consumes "two", skips "of")
//! │ PARSER          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ITEM            │  → chicken_breast (contains variant "chicken breasts")
//! │ NORMALIZER      │
//! └─────────────────┘
//!          │
//!          ▼
//!   Operation::Add { item: chicken_breast, quantity: 2 }
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw transcripts to lowercase words
//! - [`catalog`] - Canonical items and their variant phrases
//! - [`normalizer`] - Resolve a phrase to one canonical item
//! - [`quantity`] - Digit and number-word quantities
//! - [`vocabulary`] - Verb words and undo phrases
//! - [`command`] - The [`Operation`] produced by interpretation
//! - [`interpreter`] - Main interpretation pipeline
//! - [`stdlib`] - Standard freezer catalog and verb vocabulary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod command;
pub mod interpreter;
pub mod normalizer;
pub mod quantity;
pub mod stdlib;
pub mod tokenizer;
pub mod vocabulary;

// Re-export main types for convenience
pub use catalog::{CanonicalItem, CatalogBuilder, ItemCatalog};
pub use command::{Operation, OperationKind, ParseFailureKind};
pub use interpreter::CommandInterpreter;
pub use normalizer::{ItemNormalizer, Resolution};
pub use quantity::{Quantity, QuantityParser};
pub use vocabulary::{Verb, VocabularyRegistry};
