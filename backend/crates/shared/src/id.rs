//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities. Identifiers are numeric and
//! store-assigned; the wrapper exists so a user id can never be passed where
//! an item id is expected.

use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper over a store-assigned `i64`
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wrap an existing numeric id
    pub fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying numeric value
    pub fn value(self) -> i64 {
        self.value
    }
}

// Manual impls: derives would require `T: Clone` etc., but the marker is
// phantom and never stored.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for Item IDs
    pub struct Item;

    /// Marker for Booking IDs
    pub struct Booking;

    /// Marker for ItemRequest IDs
    pub struct ItemRequest;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type ItemId = Id<markers::Item>;
pub type BookingId = Id<markers::Booking>;
pub type RequestId = Id<markers::ItemRequest>;
