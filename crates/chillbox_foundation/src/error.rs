//! Error types for the Chillbox system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Only faults live here. A transcript that cannot be understood, a removal
//! that would underflow, or an undo with empty history are ordinary results
//! and never become an [`Error`].

use std::fmt;

use thiserror::Error;

/// The main error type for Chillbox operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a storage fault.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage(message.into()))
    }

    /// Creates a migration failure for the named script.
    #[must_use]
    pub fn migration(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Migration {
            name: name.into(),
            message: message.into(),
        })
    }

    /// Creates a duplicate catalog variant error.
    #[must_use]
    pub fn duplicate_variant(
        variant: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::DuplicateVariant {
            variant: variant.into(),
            first: first.into(),
            second: second.into(),
        })
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Returns true if this error came from durable storage.
    ///
    /// Storage faults abort the current operation with no partial effect and
    /// are never retried by the core.
    #[must_use]
    pub fn is_storage_fault(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Storage(_) | ErrorKind::Migration { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Durable storage failed (I/O, constraint, transaction).
    #[error("storage fault: {0}")]
    Storage(String),

    /// A schema migration script failed and was rolled back.
    #[error("migration {name} failed: {message}")]
    Migration {
        /// File name of the migration script.
        name: String,
        /// Description of the failure.
        message: String,
    },

    /// Two canonical items claim the same variant phrase.
    #[error("variant '{variant}' claimed by both {first} and {second}")]
    DuplicateVariant {
        /// The contested phrase.
        variant: String,
        /// Item that registered the phrase first.
        first: String,
        /// Item that tried to register it again.
        second: String,
    },

    /// Canonical identifier is not in `lower_snake_case`.
    #[error("invalid item identifier: '{0}'")]
    InvalidItemId(String),

    /// Settings could not be loaded or are inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation being performed (e.g. `apply add`).
    pub operation: Option<String>,
    /// Item the operation targeted.
    pub item: Option<String>,
    /// Transcript that led to the operation.
    pub transcript: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation description.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Sets the targeted item.
    #[must_use]
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }

    /// Sets the originating transcript.
    #[must_use]
    pub fn with_transcript(mut self, transcript: impl Into<String>) -> Self {
        self.transcript = Some(transcript.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut part = |f: &mut fmt::Formatter<'_>, label: &str, value: &str| {
            let sep = if first { "" } else { ", " };
            first = false;
            write!(f, "{sep}{label} {value}")
        };
        if let Some(op) = &self.operation {
            part(f, "during", op)?;
        }
        if let Some(item) = &self.item {
            part(f, "item", item)?;
        }
        if let Some(transcript) = &self.transcript {
            part(f, "transcript", &format!("{transcript:?}"))?;
        }
        Ok(())
    }
}

/// Result type alias for Chillbox operations.
pub type Result<T> = std::result::Result<T, Error>;
