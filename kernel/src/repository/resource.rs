use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::ResourceId,
    list::PaginatedList,
    resource::{query::ResourceListQuery, Resource, ResourceAvailability},
};

#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn find_all(&self, query: ResourceListQuery) -> AppResult<PaginatedList<Resource>>;
    async fn find_by_id(&self, resource_id: &ResourceId) -> AppResult<Option<Resource>>;
    /// 各リソースの状態と割り当て可否フラグのみを確認する。
    /// 他予約との時間帯競合は見ないため、重複割り当ては検出できない。
    /// 存在しない ID は読み飛ばす。
    async fn check_availability(
        &self,
        resource_ids: &[ResourceId],
    ) -> AppResult<ResourceAvailability>;
}
