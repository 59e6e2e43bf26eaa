use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::{id::UserId, user::query::UserListQuery};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::user::{
    DepartmentsResponse, PaginatedUsersResponse, UserListQueryParams, UserResponse,
};

pub async fn show_user_list(
    Query(params): Query<UserListQueryParams>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PaginatedUsersResponse>> {
    params.validate(&())?;
    let query = UserListQuery::try_from(params)?;

    registry
        .user_repository()
        .find_all(query)
        .await
        .map(PaginatedUsersResponse::from)
        .map(Json)
}

pub async fn show_user(
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_repository()
        .find_by_id(&user_id)
        .await
        .and_then(|user| match user {
            Some(user) => Ok(Json(user.into())),
            None => Err(AppError::EntityNotFound(format!(
                "user ({user_id}) not found"
            ))),
        })
}

/// 利用者の所属部署一覧。管理画面の絞り込みプルダウンが使う。
pub async fn show_departments(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DepartmentsResponse>> {
    registry
        .user_repository()
        .find_departments()
        .await
        .map(|departments| Json(DepartmentsResponse { departments }))
}
