//! Annotate Items Use Case - Item Availability Annotator
//!
//! For a batch of items, attaches the nearest past and nearest future
//! booking to each item the viewer owns. The future and past booking sets
//! are fetched with one batched query each over the whole item id set, never
//! per item.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::clock::Clock;
use kernel::id::{BookingId, UserId};

use crate::domain::entities::{Booking, Item};
use crate::domain::repository::{BookingQuery, BookingRepository, BookingSelection};
use crate::error::BookingResult;

/// Booking summary attached to an item
///
/// Carries ids and instants only; the viewer already has the item, and the
/// booker row is not theirs to see here.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSummary {
    pub id: BookingId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub booker_id: UserId,
}

impl From<&Booking> for BookingSummary {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            start: booking.start,
            end: booking.end,
            booker_id: booking.booker_id,
        }
    }
}

/// An item with its booking annotations
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedItem {
    pub item: Item,
    pub last_booking: Option<BookingSummary>,
    pub next_booking: Option<BookingSummary>,
}

/// Annotate Items Use Case
pub struct AnnotateItemsUseCase<B, C>
where
    B: BookingRepository,
    C: Clock,
{
    bookings: Arc<B>,
    clock: Arc<C>,
}

impl<B, C> AnnotateItemsUseCase<B, C>
where
    B: BookingRepository,
    C: Clock,
{
    pub fn new(bookings: Arc<B>, clock: Arc<C>) -> Self {
        Self { bookings, clock }
    }

    pub async fn execute(
        &self,
        items: Vec<Item>,
        viewer: UserId,
    ) -> BookingResult<Vec<AnnotatedItem>> {
        let item_ids: Vec<_> = items.iter().map(|item| item.id).collect();
        let now = self.clock.now();

        let future = self
            .bookings
            .search_all_bookings(&BookingQuery::for_items(
                item_ids.clone(),
                BookingSelection::Future { now },
            ))
            .await?;
        let past = self
            .bookings
            .search_all_bookings(&BookingQuery::for_items(
                item_ids,
                BookingSelection::Past { now },
            ))
            .await?;

        let mut result: Vec<AnnotatedItem> = Vec::with_capacity(items.len());
        for item in items {
            // The most imminent upcoming booking, and the most recently
            // finished one
            let next_booking = future
                .iter()
                .filter(|b| b.item_id == item.id)
                .min_by_key(|b| b.start)
                .map(BookingSummary::from);
            let last_booking = past
                .iter()
                .filter(|b| b.item_id == item.id)
                .max_by_key(|b| b.end)
                .map(BookingSummary::from);

            if item.owner_id != viewer || (next_booking.is_none() && last_booking.is_none()) {
                result.push(AnnotatedItem {
                    item,
                    last_booking: None,
                    next_booking: None,
                });
                continue;
            }

            // Owned items with booking activity float to the top; clients
            // depend on this ordering.
            result.insert(
                0,
                AnnotatedItem {
                    item,
                    last_booking,
                    next_booking,
                },
            );
        }

        Ok(result)
    }
}
