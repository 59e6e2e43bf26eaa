use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::RoomId,
    list::PaginatedList,
    room::{query::RoomListQuery, Room},
};

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// フィルタ・検索・ソート・ページネーションを適用した部屋一覧を取得する
    async fn find_all(&self, query: RoomListQuery) -> AppResult<PaginatedList<Room>>;
    async fn find_by_id(&self, room_id: &RoomId) -> AppResult<Option<Room>>;
}
