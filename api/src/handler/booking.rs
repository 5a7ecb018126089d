use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::{
    booking::{
        event::{DeleteBooking, UpdateBookingStatus, UpdatePaymentStatus},
        BookingReference,
    },
    id::BookingId,
    list::{BookingListFilter, BookingSearch},
    view::ViewPath,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use super::view::{cached, invalidate, or_empty};
use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        BookingListQuery, BookingResponse, BookingSearchQuery, BookingsResponse,
        CreateBookingRequest, UpdateBookingStatusRequest, UpdatePaymentStatusRequest,
    },
};

pub async fn register_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let customer_id = req.customer_id;
    let booking_id = registry
        .booking_repository()
        .create(req.into_event(user.id(), BookingReference::generate()))
        .await?;

    invalidate(
        &registry,
        &[ViewPath::Bookings, ViewPath::Customer(customer_id)],
    )
    .await;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, ViewPath::Booking(booking_id).location())],
    ))
}

pub async fn show_booking_list(
    _user: AuthorizedUser,
    Query(query): Query<BookingListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    let filter = BookingListFilter::try_from(query)?;

    let bookings = cached(&registry, ViewPath::Bookings, || async {
        registry
            .booking_repository()
            .find_all()
            .await
            .map(BookingsResponse::from)
    })
    .await
    .map(|res| res.items);

    Ok(Json(BookingsResponse {
        items: filter.apply(or_empty(bookings, "bookings")),
    }))
}

pub async fn search_bookings(
    _user: AuthorizedUser,
    Query(query): Query<BookingSearchQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    let search = BookingSearch::try_from(query)?;

    let bookings = registry.booking_repository().search(search).await;
    Ok(Json(or_empty(bookings, "booking search results").into()))
}

pub async fn show_booking(
    _user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    cached(&registry, ViewPath::Booking(booking_id), || async {
        registry
            .booking_repository()
            .find_by_id(booking_id)
            .await
            .and_then(|b| match b {
                Some(b) => Ok(BookingResponse::from(b)),
                None => Err(AppError::EntityNotFound("booking not found".into())),
            })
    })
    .await
    .map(Json)
}

pub async fn update_booking_status(
    _user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookingStatusRequest>,
) -> AppResult<StatusCode> {
    let customer_id = registry
        .booking_repository()
        .update_status(UpdateBookingStatus::new(booking_id, req.status))
        .await?;

    invalidate(
        &registry,
        &[
            ViewPath::Bookings,
            ViewPath::Booking(booking_id),
            ViewPath::Customer(customer_id),
        ],
    )
    .await;
    Ok(StatusCode::OK)
}

pub async fn update_payment_status(
    _user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdatePaymentStatusRequest>,
) -> AppResult<StatusCode> {
    let customer_id = registry
        .booking_repository()
        .update_payment_status(UpdatePaymentStatus::new(booking_id, req.payment_status))
        .await?;

    invalidate(
        &registry,
        &[
            ViewPath::Bookings,
            ViewPath::Booking(booking_id),
            ViewPath::Customer(customer_id),
        ],
    )
    .await;
    Ok(StatusCode::OK)
}

pub async fn delete_booking(
    _user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    let customer_id = registry
        .booking_repository()
        .delete(DeleteBooking::new(booking_id))
        .await?;

    invalidate(
        &registry,
        &[
            ViewPath::Bookings,
            ViewPath::Booking(booking_id),
            ViewPath::Customer(customer_id),
        ],
    )
    .await;

    Ok((
        StatusCode::SEE_OTHER,
        [(header::LOCATION, ViewPath::Bookings.location())],
    ))
}
