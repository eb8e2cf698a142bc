//! Application Layer - Use Cases
//!
//! One use case per operation. Each use case owns `Arc`s to the repositories
//! and the clock it needs, samples the clock once per call, and returns
//! domain values or a [`crate::error::BookingError`].

pub mod annotate_items;
pub mod change_status;
pub mod create_booking;
pub mod get_booking;
pub mod list_bookings;
