use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    booking::{query::BookingListQuery, Booking},
    id::{BookingId, RoomId},
    list::PaginatedList,
    time::TimeWindow,
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn find_all(&self, query: BookingListQuery) -> AppResult<PaginatedList<Booking>>;
    async fn find_by_id(&self, booking_id: &BookingId) -> AppResult<Option<Booking>>;
    /// 指定の部屋・時間帯で予約が可能かを判定する。
    /// - 部屋が存在しない、または status が available 以外なら false（フェイルクローズ）
    /// - confirmed の既存予約と時間帯が交差すれば false
    /// - exclude_booking を指定すると、その予約自身は競合判定から除外する
    ///   （予約編集時の再検証に使う）
    async fn check_room_availability(
        &self,
        room_id: &RoomId,
        window: &TimeWindow,
        exclude_booking: Option<&BookingId>,
    ) -> AppResult<bool>;
}
