//! API DTOs (Data Transfer Objects)
//!
//! JSON field names follow the established wire contract (camelCase,
//! `itemId`, `bookerId`, `lastBooking`/`nextBooking`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::annotate_items::{AnnotatedItem, BookingSummary};
use crate::domain::entities::Booking;

fn default_state() -> String {
    "ALL".to_owned()
}

fn default_size() -> i64 {
    100
}

/// Request for POST /bookings
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub item_id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Response for booking operations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: String,
    pub item_id: i64,
    pub booker_id: i64,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.value(),
            start: booking.start,
            end: booking.end,
            status: booking.status.as_str().to_owned(),
            item_id: booking.item_id.value(),
            booker_id: booking.booker_id.value(),
        }
    }
}

/// Nearest past/future booking attached to an owned item
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInfo {
    pub id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub booker_id: i64,
}

impl From<BookingSummary> for BookingInfo {
    fn from(summary: BookingSummary) -> Self {
        Self {
            id: summary.id.value(),
            start: summary.start,
            end: summary.end,
            booker_id: summary.booker_id.value(),
        }
    }
}

/// Response for GET /items
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i64,
    pub request_id: Option<i64>,
    pub last_booking: Option<BookingInfo>,
    pub next_booking: Option<BookingInfo>,
}

impl From<AnnotatedItem> for ItemResponse {
    fn from(annotated: AnnotatedItem) -> Self {
        Self {
            id: annotated.item.id.value(),
            name: annotated.item.name,
            description: annotated.item.description,
            available: annotated.item.available,
            owner_id: annotated.item.owner_id.value(),
            request_id: annotated.item.request_id.map(|id| id.value()),
            last_booking: annotated.last_booking.map(Into::into),
            next_booking: annotated.next_booking.map(Into::into),
        }
    }
}

/// Query params for the booking listing endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_state")]
    pub state: String,
    #[serde(default)]
    pub from: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

/// Query params for GET /items
#[derive(Debug, Clone, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub from: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

/// Query params for PATCH /bookings/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct ApproveParams {
    pub approved: bool,
}
