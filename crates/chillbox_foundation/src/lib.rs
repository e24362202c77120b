//! Core identifiers and error types for Chillbox.
//!
//! This crate provides:
//! - [`ItemId`] - Canonical freezer item identifiers
//! - [`MAX_QUANTITY`] - Upper bound on any spoken quantity
//! - [`OperationKind`] - Add/remove/set, as recorded in history
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod item;
pub mod kind;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use item::{ItemId, MAX_QUANTITY};
pub use kind::OperationKind;
