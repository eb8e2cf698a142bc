//! Repository Traits
//!
//! The store contract the booking core consumes. Implementation is in the
//! infrastructure layer; tests use an in-memory implementation. Search
//! results are always ordered by start instant descending and are distinct
//! by booking id.

use chrono::{DateTime, Utc};
use kernel::id::{BookingId, ItemId, UserId};

use crate::domain::entities::{Booking, BookingDraft, Item, User};
use crate::domain::value_objects::{BookingState, BookingStatus, Page};
use crate::error::BookingResult;

/// Which bookings a query ranges over
#[derive(Debug, Clone)]
pub enum BookingScope {
    /// Bookings requested by this user
    Booker(UserId),
    /// Bookings against any item in this set (an owner's items)
    Items(Vec<ItemId>),
}

/// How the query classifies bookings in time
///
/// The temporal variants carry the instant sampled at the start of the
/// logical operation, so one listing call never mixes two notions of "now".
#[derive(Debug, Clone, Copy)]
pub enum BookingSelection {
    All,
    Status(BookingStatus),
    /// `start > now`
    Future { now: DateTime<Utc> },
    /// `end < now`
    Past { now: DateTime<Utc> },
    /// `start < now && end > now`
    Current { now: DateTime<Utc> },
}

impl BookingSelection {
    /// Bind a listing keyword to a sampled instant
    pub fn from_state(state: BookingState, now: DateTime<Utc>) -> Self {
        match state {
            BookingState::All => BookingSelection::All,
            BookingState::Waiting => BookingSelection::Status(BookingStatus::Waiting),
            BookingState::Rejected => BookingSelection::Status(BookingStatus::Rejected),
            BookingState::Future => BookingSelection::Future { now },
            BookingState::Past => BookingSelection::Past { now },
            BookingState::Current => BookingSelection::Current { now },
        }
    }
}

/// A booking search: scope × temporal selection
#[derive(Debug, Clone)]
pub struct BookingQuery {
    pub scope: BookingScope,
    pub selection: BookingSelection,
}

impl BookingQuery {
    pub fn for_booker(booker_id: UserId, selection: BookingSelection) -> Self {
        Self {
            scope: BookingScope::Booker(booker_id),
            selection,
        }
    }

    pub fn for_items(item_ids: Vec<ItemId>, selection: BookingSelection) -> Self {
        Self {
            scope: BookingScope::Items(item_ids),
            selection,
        }
    }

    /// Reference predicate for this query.
    ///
    /// The PostgreSQL implementation expresses the same conditions in SQL;
    /// the in-memory implementation applies this directly.
    pub fn matches(&self, booking: &Booking) -> bool {
        let in_scope = match &self.scope {
            BookingScope::Booker(booker_id) => booking.booker_id == *booker_id,
            BookingScope::Items(item_ids) => item_ids.contains(&booking.item_id),
        };
        if !in_scope {
            return false;
        }
        match self.selection {
            BookingSelection::All => true,
            BookingSelection::Status(status) => booking.status == status,
            BookingSelection::Future { now } => booking.start > now,
            BookingSelection::Past { now } => booking.end < now,
            BookingSelection::Current { now } => booking.start < now && booking.end > now,
        }
    }
}

/// User lookups
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find a user by id
    async fn find_user(&self, id: UserId) -> BookingResult<Option<User>>;
}

/// Item lookups
#[trait_variant::make(ItemRepository: Send)]
pub trait LocalItemRepository {
    /// Find an item by id
    async fn find_item(&self, id: ItemId) -> BookingResult<Option<Item>>;

    /// Ids of all items owned by the given user
    async fn owned_item_ids(&self, owner_id: UserId) -> BookingResult<Vec<ItemId>>;

    /// One page of the items owned by the given user, ordered by item id
    async fn find_items_by_owner(&self, owner_id: UserId, page: Page) -> BookingResult<Vec<Item>>;
}

/// Booking persistence and search
#[trait_variant::make(BookingRepository: Send)]
pub trait LocalBookingRepository {
    /// Insert a new booking; the store assigns the id
    async fn create_booking(&self, draft: &BookingDraft) -> BookingResult<Booking>;

    /// Find a booking by id
    async fn find_booking(&self, id: BookingId) -> BookingResult<Option<Booking>>;

    /// Persist a status transition and return the updated booking
    async fn update_booking_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> BookingResult<Booking>;

    /// One page of bookings matching the query, start descending
    async fn search_bookings(
        &self,
        query: &BookingQuery,
        page: Page,
    ) -> BookingResult<Vec<Booking>>;

    /// All bookings matching the query, start descending (used for the
    /// batched annotator queries)
    async fn search_all_bookings(&self, query: &BookingQuery) -> BookingResult<Vec<Booking>>;
}
