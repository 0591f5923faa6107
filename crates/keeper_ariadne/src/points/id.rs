//! # Point Identifiers
//!
//! A point id is an index into the pool's slot table wrapped in its own type,
//! so it cannot be mixed up with triangle, edge or route indices elsewhere in
//! the navigation code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle naming a slot in a [`PointPool`](super::PointPool).
///
/// Stored by navigation structures in place of coordinates. The raw value is
/// signed so that client tables using negative "unset" markers can round-trip
/// through [`PointId::from_raw`]; every such value is simply invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct PointId(i32);

impl PointId {
    /// The sentinel "no point" id. Never allocated, always reads as (0, 0).
    pub const INVALID: Self = Self(0);

    /// Wraps a raw identifier taken from a client table.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier for storage in client tables.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Returns the slot index, or `None` for negative raw values.
    #[inline]
    #[must_use]
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }

    /// Checks if this is the sentinel id.
    #[inline]
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        self.0 == 0
    }

    /// Builds an id from a slot index already known to fit the table.
    ///
    /// Pool slot counts are capped at `i32::MAX`, so the conversion is exact.
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub(crate) const fn from_slot(index: usize) -> Self {
        Self(index as i32)
    }
}

impl Default for PointId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sentinel() {
        assert_eq!(PointId::default(), PointId::INVALID);
        assert!(PointId::default().is_invalid());
        assert_eq!(PointId::INVALID.index(), Some(0));
    }

    #[test]
    fn test_raw_roundtrip() {
        let id = PointId::from_raw(1234);
        assert_eq!(id.raw(), 1234);
        assert_eq!(id.index(), Some(1234));
        assert!(!id.is_invalid());
    }

    #[test]
    fn test_negative_raw_has_no_index() {
        assert_eq!(PointId::from_raw(-1).index(), None);
        assert_eq!(PointId::from_raw(i32::MIN).index(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(PointId::from_raw(42).to_string(), "42");
    }
}
