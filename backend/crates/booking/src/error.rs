//! Booking Error Types
//!
//! This module provides booking-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! The variants partition into three classes:
//! - not-found class (404): missing entities, and authorization failures,
//!   which are deliberately reported as not-found so an unauthorized caller
//!   cannot confirm that a resource exists
//! - invalid-request class (400): a caller-supplied value violates a
//!   business rule
//! - fatal (500): storage failures, propagated without translation

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::{BookingId, ItemId, UserId};
use thiserror::Error;

/// Booking-specific result type alias
pub type BookingResult<T> = Result<T, BookingError>;

/// Booking-specific error variants
#[derive(Debug, Error)]
pub enum BookingError {
    /// Referenced user does not exist
    #[error("User with id {0} does not exist")]
    UserNotFound(UserId),

    /// Referenced item does not exist
    #[error("Item with id {0} does not exist")]
    ItemNotFound(ItemId),

    /// Referenced booking does not exist
    #[error("Booking with id {0} does not exist")]
    BookingNotFound(BookingId),

    /// Item's availability flag is not set
    #[error("Can't create a booking for an unavailable item")]
    ItemUnavailable,

    /// Requested end instant is already in the past
    #[error("Can't create a booking with end date in the past")]
    EndInPast,

    /// Requested start instant is already in the past
    #[error("Can't create a booking with start date in the past")]
    StartInPast,

    /// Requested window ends on or before it starts
    #[error("Can't create a booking with end date which is before start date")]
    EndBeforeStart,

    /// Owner tried to book their own item. Not-found class on purpose.
    #[error("Can't create the booking. User can't book own items")]
    OwnItem,

    /// Caller is neither the booker nor the item owner. Not-found class.
    #[error("User with id {user_id} is not booker/owner for booking with id {booking_id}")]
    NotBookerOrOwner {
        user_id: UserId,
        booking_id: BookingId,
    },

    /// Caller is not the item owner. Not-found class.
    #[error("User with id {user_id} is not owner for item from booking with id {booking_id}")]
    NotOwner {
        user_id: UserId,
        booking_id: BookingId,
    },

    /// The booking already holds the requested status
    #[error("Status is already updated for booking with id {0}")]
    StatusAlreadySet(BookingId),

    /// Unrecognized temporal listing keyword
    #[error("Unknown state: {0}")]
    UnknownState(String),

    /// Negative or zero pagination parameters
    #[error("Wrong pagination parameters")]
    InvalidPagination,

    /// Missing required header (e.g., X-Sharer-User-Id)
    #[error("Missing required header: {0}")]
    MissingHeader(String),

    /// Malformed required header
    #[error("Invalid value for header: {0}")]
    InvalidHeader(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BookingError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookingError::UserNotFound(_)
            | BookingError::ItemNotFound(_)
            | BookingError::BookingNotFound(_)
            | BookingError::OwnItem
            | BookingError::NotBookerOrOwner { .. }
            | BookingError::NotOwner { .. } => ErrorKind::NotFound,
            BookingError::ItemUnavailable
            | BookingError::EndInPast
            | BookingError::StartInPast
            | BookingError::EndBeforeStart
            | BookingError::StatusAlreadySet(_)
            | BookingError::UnknownState(_)
            | BookingError::InvalidPagination
            | BookingError::MissingHeader(_)
            | BookingError::InvalidHeader(_) => ErrorKind::BadRequest,
            BookingError::Database(_) | BookingError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BookingError::Database(e) => {
                tracing::error!(error = %e, "Booking database error");
            }
            BookingError::Internal(msg) => {
                tracing::error!(message = %msg, "Booking internal error");
            }
            BookingError::NotBookerOrOwner { user_id, booking_id }
            | BookingError::NotOwner { user_id, booking_id } => {
                tracing::warn!(
                    user_id = %user_id,
                    booking_id = %booking_id,
                    "Unauthorized booking access reported as not found"
                );
            }
            _ => {
                tracing::debug!(error = %self, "Booking error");
            }
        }
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
