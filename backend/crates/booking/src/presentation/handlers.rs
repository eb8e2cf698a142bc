//! HTTP Handlers
//!
//! Thin adapters: extract the caller id from the `X-Sharer-User-Id` header,
//! validate raw pagination params, delegate to a use case, convert to a DTO.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use kernel::clock::Clock;
use kernel::id::{BookingId, UserId};
use std::sync::Arc;

use crate::application::annotate_items::AnnotateItemsUseCase;
use crate::application::change_status::ChangeStatusUseCase;
use crate::application::create_booking::{CreateBookingInput, CreateBookingUseCase};
use crate::application::get_booking::GetBookingUseCase;
use crate::application::list_bookings::ListBookingsUseCase;
use crate::domain::repository::{BookingRepository, ItemRepository, UserRepository};
use crate::domain::value_objects::Page;
use crate::error::{BookingError, BookingResult};
use crate::presentation::dto::{
    ApproveParams, BookingResponse, CreateBookingRequest, ItemResponse, ListParams, PageParams,
};

/// Header carrying the caller's user id
pub const SHARER_USER_ID: &str = "X-Sharer-User-Id";

/// Shared state for booking handlers
pub struct BookingAppState<R, C>
where
    R: UserRepository + ItemRepository + BookingRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    pub repo: Arc<R>,
    pub clock: Arc<C>,
}

// Manual Clone: a derive would put bounds on R and C themselves
impl<R, C> Clone for BookingAppState<R, C>
where
    R: UserRepository + ItemRepository + BookingRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            clock: self.clock.clone(),
        }
    }
}

/// Extract the pre-validated numeric caller id from the headers
fn sharer_user_id(headers: &HeaderMap) -> BookingResult<UserId> {
    let value = headers
        .get(SHARER_USER_ID)
        .ok_or_else(|| BookingError::MissingHeader(SHARER_USER_ID.to_owned()))?;

    value
        .to_str()
        .ok()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .map(UserId::new)
        .ok_or_else(|| BookingError::InvalidHeader(SHARER_USER_ID.to_owned()))
}

/// Validate raw offset/size params before they become a [`Page`]
fn page_from_raw(from: i64, size: i64) -> BookingResult<Page> {
    if from < 0 || size <= 0 {
        return Err(BookingError::InvalidPagination);
    }
    Ok(Page::new(from as u64, size as u64))
}

/// POST /bookings
pub async fn create_booking<R, C>(
    State(state): State<BookingAppState<R, C>>,
    headers: HeaderMap,
    Json(req): Json<CreateBookingRequest>,
) -> BookingResult<Json<BookingResponse>>
where
    R: UserRepository + ItemRepository + BookingRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    let requester = sharer_user_id(&headers)?;

    let use_case = CreateBookingUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.clock.clone(),
    );

    let input = CreateBookingInput {
        item_id: req.item_id.into(),
        start: req.start,
        end: req.end,
    };

    let booking = use_case.execute(requester, input).await?;
    Ok(Json(booking.into()))
}

/// GET /bookings/{id}
pub async fn get_booking<R, C>(
    State(state): State<BookingAppState<R, C>>,
    headers: HeaderMap,
    Path(booking_id): Path<i64>,
) -> BookingResult<Json<BookingResponse>>
where
    R: UserRepository + ItemRepository + BookingRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    let requester = sharer_user_id(&headers)?;

    let use_case = GetBookingUseCase::new(state.repo.clone(), state.repo.clone());
    let booking = use_case
        .execute(BookingId::new(booking_id), requester)
        .await?;

    Ok(Json(booking.into()))
}

/// PATCH /bookings/{id}?approved=
pub async fn change_booking_status<R, C>(
    State(state): State<BookingAppState<R, C>>,
    headers: HeaderMap,
    Path(booking_id): Path<i64>,
    Query(params): Query<ApproveParams>,
) -> BookingResult<Json<BookingResponse>>
where
    R: UserRepository + ItemRepository + BookingRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    let requester = sharer_user_id(&headers)?;

    let use_case = ChangeStatusUseCase::new(state.repo.clone(), state.repo.clone());
    let booking = use_case
        .execute(BookingId::new(booking_id), requester, params.approved)
        .await?;

    Ok(Json(booking.into()))
}

/// GET /bookings?state=&from=&size=
pub async fn list_bookings_for_booker<R, C>(
    State(state): State<BookingAppState<R, C>>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> BookingResult<Json<Vec<BookingResponse>>>
where
    R: UserRepository + ItemRepository + BookingRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    let requester = sharer_user_id(&headers)?;
    let page = page_from_raw(params.from, params.size)?;

    let use_case = ListBookingsUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.clock.clone(),
    );

    let bookings = use_case.for_booker(&params.state, requester, page).await?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

/// GET /bookings/owner?state=&from=&size=
pub async fn list_bookings_for_owner<R, C>(
    State(state): State<BookingAppState<R, C>>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> BookingResult<Json<Vec<BookingResponse>>>
where
    R: UserRepository + ItemRepository + BookingRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    let requester = sharer_user_id(&headers)?;
    let page = page_from_raw(params.from, params.size)?;

    let use_case = ListBookingsUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.clock.clone(),
    );

    let bookings = use_case.for_owner(&params.state, requester, page).await?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

/// GET /items - the caller's own items with booking annotations
pub async fn list_items<R, C>(
    State(state): State<BookingAppState<R, C>>,
    headers: HeaderMap,
    Query(params): Query<PageParams>,
) -> BookingResult<Json<Vec<ItemResponse>>>
where
    R: UserRepository + ItemRepository + BookingRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    let viewer = sharer_user_id(&headers)?;
    let page = page_from_raw(params.from, params.size)?;

    let items = state.repo.find_items_by_owner(viewer, page).await?;

    let use_case = AnnotateItemsUseCase::new(state.repo.clone(), state.clock.clone());
    let annotated = use_case.execute(items, viewer).await?;

    Ok(Json(annotated.into_iter().map(Into::into).collect()))
}
