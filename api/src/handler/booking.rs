use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::{booking::query::BookingListQuery, id::BookingId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::booking::{BookingListQueryParams, BookingResponse, PaginatedBookingsResponse};

pub async fn show_booking_list(
    Query(params): Query<BookingListQueryParams>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PaginatedBookingsResponse>> {
    params.validate(&())?;
    let query = BookingListQuery::try_from(params)?;

    registry
        .booking_repository()
        .find_all(query)
        .await
        .map(PaginatedBookingsResponse::from)
        .map(Json)
}

pub async fn show_booking(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .booking_repository()
        .find_by_id(&booking_id)
        .await
        .and_then(|booking| match booking {
            Some(booking) => Ok(Json(booking.into())),
            None => Err(AppError::EntityNotFound(format!(
                "booking ({booking_id}) not found"
            ))),
        })
}
