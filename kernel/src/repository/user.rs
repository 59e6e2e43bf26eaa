use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::UserId,
    list::PaginatedList,
    user::{query::UserListQuery, User},
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self, query: UserListQuery) -> AppResult<PaginatedList<User>>;
    async fn find_by_id(&self, user_id: &UserId) -> AppResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    /// 所属部署の一覧（重複なし・昇順）
    async fn find_departments(&self) -> AppResult<Vec<String>>;
}
