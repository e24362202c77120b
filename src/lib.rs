//! Chillbox - Voice-driven freezer inventory
//!
//! This crate re-exports all layers of the Chillbox system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: chillbox_runtime    - Settings, logging, console REPL, CLI
//! Layer 2: chillbox_engine     - Inventory controller, undo, collaborator seams
//! Layer 1: chillbox_parser     - Catalog, item normalizer, quantities, interpreter
//!          chillbox_storage    - SQLite and in-memory stores, migrations
//! Layer 0: chillbox_foundation - Core types (ItemId, OperationKind, Error)
//! ```

pub use chillbox_engine as engine;
pub use chillbox_foundation as foundation;
pub use chillbox_parser as parser;
pub use chillbox_runtime as runtime;
pub use chillbox_storage as storage;
