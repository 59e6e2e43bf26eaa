pub mod auth;
pub mod booking;
pub mod resource;
pub mod room;
pub mod user;

use std::str::FromStr;

use shared::error::{AppError, AppResult};

pub(crate) const DEFAULT_PAGE: u32 = 1;
pub(crate) const DEFAULT_PAGE_SIZE: u32 = 10;

/// クエリパラメータは文字列で届く。空文字列は「指定なし」として扱い、
/// それ以外は列挙された値のみを受け付ける。
pub(crate) fn parse_param<T: FromStr>(name: &str, value: Option<String>) -> AppResult<Option<T>> {
    match value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => T::from_str(v)
            .map(Some)
            .map_err(|_| AppError::InvalidParameter(format!("invalid value for {name}: {v}"))),
        None => Ok(None),
    }
}

pub(crate) fn parse_bool_param(name: &str, value: Option<String>) -> AppResult<bool> {
    match value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") | None => Ok(false),
        Some(v) => Err(AppError::InvalidParameter(format!(
            "invalid value for {name}: {v}"
        ))),
    }
}

/// 空文字列のパラメータは「指定なし」とみなす
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
