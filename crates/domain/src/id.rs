//! Typed item identifier.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for an [`Item`](crate::item::Item).
///
/// Issued sequentially by the store starting at [`ItemId::FIRST`].
/// Serializes as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// The first identifier handed out by an empty store.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw integer.
    #[must_use]
    pub const fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// Access the inner integer.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// The identifier following this one.
    #[must_use]
    pub const fn successor(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ItemId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_at_one() {
        assert_eq!(ItemId::default().as_i64(), 1);
        assert_eq!(ItemId::FIRST.successor().as_i64(), 2);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = ItemId::from_raw(42);
        let parsed: ItemId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_accept_signed_integers() {
        assert_eq!("-3".parse::<ItemId>().unwrap().as_i64(), -3);
        assert_eq!("+5".parse::<ItemId>().unwrap().as_i64(), 5);
    }

    #[test]
    fn should_return_error_when_parsing_non_integer() {
        assert!("abc".parse::<ItemId>().is_err());
        assert!("1.5".parse::<ItemId>().is_err());
        assert!("".parse::<ItemId>().is_err());
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let json = serde_json::to_string(&ItemId::from_raw(9)).unwrap();
        assert_eq!(json, "9");
    }
}
