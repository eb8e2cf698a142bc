//! Change Booking Status Use Case
//!
//! The owner's approve/reject decision. The transition itself is decided by
//! the status state machine; requesting the status the booking already holds
//! is rejected, never silently accepted.

use std::sync::Arc;

use kernel::id::{BookingId, UserId};

use crate::domain::entities::Booking;
use crate::domain::repository::{BookingRepository, ItemRepository};
use crate::error::{BookingError, BookingResult};

/// Change Booking Status Use Case
pub struct ChangeStatusUseCase<I, B>
where
    I: ItemRepository,
    B: BookingRepository,
{
    items: Arc<I>,
    bookings: Arc<B>,
}

impl<I, B> ChangeStatusUseCase<I, B>
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
        approve: bool,
    ) -> BookingResult<Booking> {
        let booking = self
            .bookings
            .find_booking(booking_id)
            .await?
            .ok_or(BookingError::BookingNotFound(booking_id))?;

        let item = self
            .items
            .find_item(booking.item_id)
            .await?
            .ok_or(BookingError::ItemNotFound(booking.item_id))?;

        if item.owner_id != requester {
            return Err(BookingError::NotOwner {
                user_id: requester,
                booking_id,
            });
        }

        let next = booking
            .status
            .decide(approve)
            .ok_or(BookingError::StatusAlreadySet(booking_id))?;

        let updated = self.bookings.update_booking_status(booking_id, next).await?;

        tracing::info!(
            booking_id = %booking_id,
            status = %next,
            "Booking status changed"
        );

        Ok(updated)
    }
}
