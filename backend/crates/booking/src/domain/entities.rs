//! Domain Entities
//!
//! Core business entities for the booking domain. Entities reference each
//! other by typed id, never by embedded row; a booking's item and booker are
//! fixed at creation and only its status changes afterwards.

use chrono::{DateTime, Utc};
use kernel::id::{BookingId, ItemId, RequestId, UserId};

use crate::domain::value_objects::BookingStatus;

/// A registered user. Listed items reference their owner's id; bookings
/// reference their booker's id.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// A lendable item. The `available` flag gates new bookings; the owner is
/// set once at creation and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: UserId,
    /// Set when the item was listed in answer to an item request
    pub request_id: Option<RequestId>,
}

/// A persisted booking. `end > start` is enforced at creation time only.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
    pub item_id: ItemId,
    pub booker_id: UserId,
}

/// An unsaved booking; the store assigns the id on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
    pub item_id: ItemId,
    pub booker_id: UserId,
}

impl BookingDraft {
    /// Draft a new booking request; every booking enters the lifecycle in
    /// the Waiting state.
    pub fn waiting(
        item_id: ItemId,
        booker_id: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            start,
            end,
            status: BookingStatus::Waiting,
            item_id,
            booker_id,
        }
    }
}
