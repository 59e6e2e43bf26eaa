use axum::{extract::State, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::auth::{LoginRequest, LoginResponse};

/// デモ認証。メールアドレスが登録済みかつ active であれば
/// パスワードの中身は検証せずにログイン成功として利用者を返す。
/// セッション等のサーバ側状態は持たない。
pub async fn login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    req.validate(&())?;

    let user = registry.user_repository().find_by_email(&req.email).await?;
    match user {
        Some(user) if user.is_active() => Ok(Json(LoginResponse {
            success: true,
            user: user.into(),
        })),
        _ => Err(AppError::UnauthenticatedError),
    }
}
