//! Canonical item identifiers.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, ErrorKind, Result};

/// Largest quantity a single command may name.
///
/// Anything bigger is almost certainly a transcription error.
pub const MAX_QUANTITY: u32 = 10_000;

/// Canonical identifier of one freezer item, e.g. `ground_beef`.
///
/// Identifiers are `lower_snake_case` ASCII. Clone is cheap (shared string).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ItemId(Arc<str>);

impl ItemId {
    /// Creates an identifier, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidItemId`] if the string is empty, starts or
    /// ends with `_`, or contains anything but `a-z`, `0-9` and `_`.
    pub fn new(id: impl AsRef<str>) -> Result<Self> {
        let id = id.as_ref();
        let valid = !id.is_empty()
            && !id.starts_with('_')
            && !id.ends_with('_')
            && id
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_');
        if valid {
            Ok(Self(Arc::from(id)))
        } else {
            Err(Error::new(ErrorKind::InvalidItemId(id.to_string())))
        }
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the spoken form, with underscores as spaces (`ground beef`).
    #[must_use]
    pub fn display_name(&self) -> String {
        self.0.replace('_', " ")
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ItemId {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0.to_string()
    }
}
