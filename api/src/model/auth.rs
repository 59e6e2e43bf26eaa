use garde::Validate;
use serde::{Deserialize, Serialize};

use super::user::UserResponse;

/// デモ用ログイン。メールアドレスで利用者を引き当て、
/// パスワードは空でなければ何でも通る。
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserResponse,
}
