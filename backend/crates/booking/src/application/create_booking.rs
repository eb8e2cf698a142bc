//! Create Booking Use Case
//!
//! Validates a booking request and persists it in the Waiting state. Checks
//! run in a fixed order and the first failing check wins, so error reporting
//! stays stable for clients.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::clock::Clock;
use kernel::id::{ItemId, UserId};

use crate::domain::entities::{Booking, BookingDraft};
use crate::domain::repository::{BookingRepository, ItemRepository, UserRepository};
use crate::error::{BookingError, BookingResult};

/// Create booking input
#[derive(Debug, Clone)]
pub struct CreateBookingInput {
    pub item_id: ItemId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Create Booking Use Case
pub struct CreateBookingUseCase<U, I, B, C>
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

impl<U, I, B, C> CreateBookingUseCase<U, I, B, C>
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

    pub async fn execute(
        &self,
        requester: UserId,
        input: CreateBookingInput,
    ) -> BookingResult<Booking> {
        let booker = self
            .users
            .find_user(requester)
            .await?
            .ok_or(BookingError::UserNotFound(requester))?;

        let item = self
            .items
            .find_item(input.item_id)
            .await?
            .ok_or(BookingError::ItemNotFound(input.item_id))?;

        if !item.available {
            return Err(BookingError::ItemUnavailable);
        }

        // One sampled instant for both date checks
        let now = self.clock.now();
        if input.end < now {
            return Err(BookingError::EndInPast);
        }
        if input.start < now {
            return Err(BookingError::StartInPast);
        }
        if input.end <= input.start {
            return Err(BookingError::EndBeforeStart);
        }

        // Reported as not-found so the requester learns nothing about
        // ownership they should not already know
        if item.owner_id == booker.id {
            return Err(BookingError::OwnItem);
        }

        let draft = BookingDraft::waiting(item.id, booker.id, input.start, input.end);
        let booking = self.bookings.create_booking(&draft).await?;

        tracing::info!(
            booking_id = %booking.id,
            item_id = %booking.item_id,
            booker_id = %booking.booker_id,
            "Booking created"
        );

        Ok(booking)
    }
}
