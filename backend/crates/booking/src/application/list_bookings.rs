//! List Bookings Use Case - Temporal Classification Engine
//!
//! Buckets a user's bookings (as booker) or an owner's bookings (across all
//! owned items) by a temporal keyword, ordered by start instant descending
//! and paginated after filtering.

use std::collections::HashSet;
use std::sync::Arc;

use kernel::clock::Clock;
use kernel::id::UserId;

use crate::domain::entities::Booking;
use crate::domain::repository::{
    BookingQuery, BookingRepository, BookingSelection, ItemRepository, UserRepository,
};
use crate::domain::value_objects::{BookingState, Page};
use crate::error::{BookingError, BookingResult};

/// List Bookings Use Case
pub struct ListBookingsUseCase<U, I, B, C>
where
    U: UserRepository,
    I: ItemRepository,
    B: BookingRepository,
    C: Clock,
{
    users: Arc<U>,
    items: Arc<I>,
    bookings: Arc<B>,
    clock: Arc<C>,
}

impl<U, I, B, C> ListBookingsUseCase<U, I, B, C>
where
    U: UserRepository,
    I: ItemRepository,
    B: BookingRepository,
    C: Clock,
{
    pub fn new(users: Arc<U>, items: Arc<I>, bookings: Arc<B>, clock: Arc<C>) -> Self {
        Self {
            users,
            items,
            bookings,
            clock,
        }
    }

    /// Bookings requested by `user_id`, filtered by `state`
    pub async fn for_booker(
        &self,
        state: &str,
        user_id: UserId,
        page: Page,
    ) -> BookingResult<Vec<Booking>> {
        let state = self.resolve(state, user_id).await?;
        let now = self.clock.now();

        let query = BookingQuery::for_booker(user_id, BookingSelection::from_state(state, now));
        self.bookings.search_bookings(&query, page).await
    }

    /// Bookings against any item owned by `user_id`, filtered by `state`
    pub async fn for_owner(
        &self,
        state: &str,
        user_id: UserId,
        page: Page,
    ) -> BookingResult<Vec<Booking>> {
        let state = self.resolve(state, user_id).await?;

        let owned = self.items.owned_item_ids(user_id).await?;
        if owned.is_empty() {
            return Ok(Vec::new());
        }

        let now = self.clock.now();
        let query = BookingQuery::for_items(owned, BookingSelection::from_state(state, now));
        let found = self.bookings.search_bookings(&query, page).await?;

        // The owner scope conceptually joins across many items; a booking
        // must never appear twice even if the store returns duplicates
        let mut seen = HashSet::new();
        Ok(found
            .into_iter()
            .filter(|b| seen.insert(b.id))
            .collect())
    }

    /// Parse the keyword and confirm the user exists. Keyword validation
    /// reports the raw input back to the caller.
    async fn resolve(&self, state: &str, user_id: UserId) -> BookingResult<BookingState> {
        self.users
            .find_user(user_id)
            .await?
            .ok_or(BookingError::UserNotFound(user_id))?;

        state
            .parse()
            .map_err(|()| BookingError::UnknownState(state.to_owned()))
    }
}
