//! Results of applying an operation.

use std::fmt;

use chillbox_foundation::ItemId;
use chillbox_parser::ParseFailureKind;

/// Why an operation was not applied.
///
/// Rejections are expected outcomes, not faults: nothing was written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// The transcript did not parse into a command
    Parse(ParseFailureKind),
    /// A removal asked for more than is in stock
    InsufficientQuantity,
    /// Undo was requested with empty history
    NothingToUndo,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(kind) => write!(f, "{kind}"),
            Self::InsufficientQuantity => f.write_str("insufficient quantity"),
            Self::NothingToUndo => f.write_str("nothing to undo"),
        }
    }
}

/// Outcome of [`crate::InventoryController::apply`].
///
/// `message` is short enough to be spoken aloud.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplyResult {
    /// The mutation was committed
    Applied {
        /// Affected item
        item: ItemId,
        /// Its quantity after the change
        new_quantity: u32,
        /// Confirmation for the user
        message: String,
    },
    /// Nothing was changed
    Rejected {
        /// Why
        reason: RejectionReason,
        /// Explanation for the user
        message: String,
    },
}

impl ApplyResult {
    pub(crate) fn applied(item: &ItemId, new_quantity: u32, message: String) -> Self {
        Self::Applied {
            item: item.clone(),
            new_quantity,
            message,
        }
    }

    pub(crate) fn rejected(reason: RejectionReason, message: String) -> Self {
        Self::Rejected { reason, message }
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Applied { message, .. } | Self::Rejected { message, .. } => message,
        }
    }

    /// Returns true if the operation was committed.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// The affected item, if applied.
    #[must_use]
    pub fn item(&self) -> Option<&ItemId> {
        match self {
            Self::Applied { item, .. } => Some(item),
            Self::Rejected { .. } => None,
        }
    }

    /// The item's new quantity, if applied.
    #[must_use]
    pub fn new_quantity(&self) -> Option<u32> {
        match self {
            Self::Applied { new_quantity, .. } => Some(*new_quantity),
            Self::Rejected { .. } => None,
        }
    }

    /// The rejection reason, if rejected.
    #[must_use]
    pub fn rejection(&self) -> Option<RejectionReason> {
        match self {
            Self::Applied { .. } => None,
            Self::Rejected { reason, .. } => Some(*reason),
        }
    }
}

impl fmt::Display for ApplyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// =============================================================================
// Messages
// =============================================================================

pub(crate) fn added(item: &ItemId, quantity: u32, now: u32) -> String {
    format!("Added {quantity} {}, now have {now}", item.display_name())
}

pub(crate) fn removed(item: &ItemId, quantity: u32, now: u32) -> String {
    if now == 0 {
        format!("Removed {quantity} {}, none left", item.display_name())
    } else {
        format!("Removed {quantity} {}, now have {now}", item.display_name())
    }
}

pub(crate) fn set(item: &ItemId, now: u32) -> String {
    format!("Set {} to {now}", item.display_name())
}

pub(crate) fn undone(item: &ItemId, now: u32) -> String {
    format!("Undid last change, {} back to {now}", item.display_name())
}

pub(crate) fn insufficient(item: &ItemId, requested: u32, available: u32) -> String {
    format!(
        "Cannot remove {requested} {name}, only have {available}",
        name = item.display_name()
    )
}

pub(crate) fn rejection(reason: RejectionReason) -> String {
    match reason {
        RejectionReason::Parse(ParseFailureKind::Empty) => "I didn't hear a command".to_string(),
        RejectionReason::Parse(ParseFailureKind::UnknownVerb) => {
            "Command not recognized. Start with add, remove, set or undo".to_string()
        }
        RejectionReason::Parse(ParseFailureKind::UnknownItem) => {
            "I don't know that item".to_string()
        }
        RejectionReason::Parse(ParseFailureKind::MissingQuantity) => {
            "Please say how many, like: set steak to 4".to_string()
        }
        RejectionReason::Parse(ParseFailureKind::InvalidQuantity) => {
            "That quantity is not allowed".to_string()
        }
        RejectionReason::InsufficientQuantity => "Not enough in stock".to_string(),
        RejectionReason::NothingToUndo => "Nothing to undo".to_string(),
    }
}
