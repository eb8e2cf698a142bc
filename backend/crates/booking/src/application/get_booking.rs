//! Get Booking Use Case
//!
//! Loads a booking by id with the booker-or-owner access rule.

use std::sync::Arc;

use kernel::id::{BookingId, UserId};

use crate::domain::entities::Booking;
use crate::domain::repository::{BookingRepository, ItemRepository};
use crate::error::{BookingError, BookingResult};

/// Get Booking Use Case
pub struct GetBookingUseCase<I, B>
where
    I: ItemRepository,
    B: BookingRepository,
{
    items: Arc<I>,
    bookings: Arc<B>,
}

impl<I, B> GetBookingUseCase<I, B>
where
    I: ItemRepository,
    B: BookingRepository,
{
    pub fn new(items: Arc<I>, bookings: Arc<B>) -> Self {
        Self { items, bookings }
    }

    pub async fn execute(
        &self,
        booking_id: BookingId,
        requester: UserId,
    ) -> BookingResult<Booking> {
        let booking = self
            .bookings
            .find_booking(booking_id)
            .await?
            .ok_or(BookingError::BookingNotFound(booking_id))?;

        if booking.booker_id == requester {
            return Ok(booking);
        }

        // The item row is the source of truth for ownership
        let item = self
            .items
            .find_item(booking.item_id)
            .await?
            .ok_or(BookingError::ItemNotFound(booking.item_id))?;

        if item.owner_id != requester {
            return Err(BookingError::NotBookerOrOwner {
                user_id: requester,
                booking_id,
            });
        }

        Ok(booking)
    }
}
