//! Typed operations produced by interpretation.

use std::fmt;
use std::num::NonZeroU32;

pub use chillbox_foundation::OperationKind;
use chillbox_foundation::ItemId;

/// Why a transcript could not be turned into a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseFailureKind {
    /// Transcript was empty or only punctuation
    Empty,
    /// No recognized verb at the start of the transcript
    UnknownVerb,
    /// The item phrase matched no catalog variant
    UnknownItem,
    /// A set command did not state a quantity
    MissingQuantity,
    /// Zero for add/remove, or more than the allowed maximum
    InvalidQuantity,
}

impl fmt::Display for ParseFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Empty => "empty transcript",
            Self::UnknownVerb => "unknown verb",
            Self::UnknownItem => "unknown item",
            Self::MissingQuantity => "missing quantity",
            Self::InvalidQuantity => "invalid quantity",
        };
        f.write_str(text)
    }
}

/// The parsed, typed intent of one transcript.
///
/// Quantities are at least one for [`Operation::Add`] and
/// [`Operation::Remove`] by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// Increase an item's quantity
    Add {
        /// Target item
        item: ItemId,
        /// Amount to add
        quantity: NonZeroU32,
    },
    /// Decrease an item's quantity
    Remove {
        /// Target item
        item: ItemId,
        /// Amount to remove
        quantity: NonZeroU32,
    },
    /// Overwrite an item's quantity
    Set {
        /// Target item
        item: ItemId,
        /// New quantity
        quantity: u32,
    },
    /// Revert the most recent change
    Undo,
    /// Not an actionable command
    Unrecognized(ParseFailureKind),
}

impl Operation {
    /// Returns the targeted item, if any.
    #[must_use]
    pub fn item(&self) -> Option<&ItemId> {
        match self {
            Self::Add { item, .. } | Self::Remove { item, .. } | Self::Set { item, .. } => {
                Some(item)
            }
            Self::Undo | Self::Unrecognized(_) => None,
        }
    }

    /// Returns the mutation kind for add/remove/set.
    #[must_use]
    pub fn kind(&self) -> Option<OperationKind> {
        match self {
            Self::Add { .. } => Some(OperationKind::Add),
            Self::Remove { .. } => Some(OperationKind::Remove),
            Self::Set { .. } => Some(OperationKind::Set),
            Self::Undo | Self::Unrecognized(_) => None,
        }
    }

    /// Returns true unless this is [`Operation::Unrecognized`].
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add { item, quantity } => write!(f, "add {quantity} {item}"),
            Self::Remove { item, quantity } => write!(f, "remove {quantity} {item}"),
            Self::Set { item, quantity } => write!(f, "set {item} to {quantity}"),
            Self::Undo => write!(f, "undo"),
            Self::Unrecognized(reason) => write!(f, "unrecognized ({reason})"),
        }
    }
}
