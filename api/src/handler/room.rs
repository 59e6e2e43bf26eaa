use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::{
    id::{BookingId, RoomId},
    room::query::RoomListQuery,
    time::{TimeWindow, Timestamp},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    non_blank,
    room::{
        PaginatedRoomsResponse, RoomAvailabilityQueryParams, RoomAvailabilityResponse,
        RoomListQueryParams, RoomResponse,
    },
};

pub async fn show_room_list(
    Query(params): Query<RoomListQueryParams>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PaginatedRoomsResponse>> {
    params.validate(&())?;
    let query = RoomListQuery::try_from(params)?;

    registry
        .room_repository()
        .find_all(query)
        .await
        .map(PaginatedRoomsResponse::from)
        .map(Json)
}

pub async fn show_room(
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomResponse>> {
    registry
        .room_repository()
        .find_by_id(&room_id)
        .await
        .and_then(|room| match room {
            Some(room) => Ok(Json(room.into())),
            None => Err(AppError::EntityNotFound(format!(
                "room ({room_id}) not found"
            ))),
        })
}

/// 指定の時間帯にその部屋を予約できるかを返す。
/// excludeBookingId は予約編集時に自分自身を競合から外すためのもの。
pub async fn check_room_availability(
    Path(room_id): Path<RoomId>,
    Query(params): Query<RoomAvailabilityQueryParams>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomAvailabilityResponse>> {
    params.validate(&())?;
    let RoomAvailabilityQueryParams {
        start_time,
        end_time,
        exclude_booking_id,
    } = params;

    let window = TimeWindow::new(Timestamp::new(start_time), Timestamp::new(end_time))?;
    let exclude_booking = non_blank(exclude_booking_id).map(BookingId::new);

    let available = registry
        .booking_repository()
        .check_room_availability(&room_id, &window, exclude_booking.as_ref())
        .await?;

    Ok(Json(RoomAvailabilityResponse { room_id, available }))
}
