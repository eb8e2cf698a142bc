//! Booking Router

use axum::{
    Router,
    routing::{get, post},
};
use kernel::clock::{Clock, SystemClock};
use std::sync::Arc;

use crate::domain::repository::{BookingRepository, ItemRepository, UserRepository};
use crate::infra::postgres::PgShareRepository;
use crate::presentation::handlers::{self, BookingAppState};

/// Create the booking router with the PostgreSQL repository and wall clock
pub fn booking_router(repo: PgShareRepository) -> Router {
    booking_router_generic(repo, SystemClock)
}

/// Create a booking router for any repository and clock implementation
pub fn booking_router_generic<R, C>(repo: R, clock: C) -> Router
where
    R: UserRepository + ItemRepository + BookingRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    let state = BookingAppState {
        repo: Arc::new(repo),
        clock: Arc::new(clock),
    };

    Router::new()
        .route(
            "/bookings",
            post(handlers::create_booking::<R, C>).get(handlers::list_bookings_for_booker::<R, C>),
        )
        .route("/bookings/owner", get(handlers::list_bookings_for_owner::<R, C>))
        .route(
            "/bookings/{id}",
            get(handlers::get_booking::<R, C>).patch(handlers::change_booking_status::<R, C>),
        )
        .route("/items", get(handlers::list_items::<R, C>))
        .with_state(state)
}
