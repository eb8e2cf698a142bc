//! Booking Backend Module
//!
//! Booking lifecycle and temporal classification for the item-lending
//! service: creating a booking against someone else's item, the owner's
//! approve/reject state machine, bucketing bookings by temporal state
//! (current/past/future/waiting/rejected), and annotating an owner's items
//! with their nearest past and future bookings.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, status state machine, repository traits
//! - `application/` - Use cases, one per operation
//! - `infra/` - PostgreSQL repository implementation
//! - `presentation/` - HTTP handlers and DTOs
//!
//! ## Access Model
//! - Identity is a pre-validated numeric user id carried in the
//!   `X-Sharer-User-Id` header; there is no session handling here
//! - Authorization failures are reported as *not found*, never as
//!   *forbidden*, so an unauthorized caller cannot confirm that a booking
//!   exists
//! - Every operation samples the injected clock exactly once, so all
//!   temporal comparisons within one call agree on "now"

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{BookingError, BookingResult};
pub use infra::postgres::PgShareRepository;
pub use presentation::router::{booking_router, booking_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};
