pub mod query;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::model::{id::UserId, time::Timestamp};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    User,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// ログイン時の一意な検索キー
    pub email: String,
    pub role: Role,
    pub department: String,
    pub position: String,
    pub phone: String,
    pub profile_image: String,
    pub date_created: Timestamp,
    pub last_login: Timestamp,
    pub status: UserStatus,
}

impl User {
    pub fn search_fields(&self) -> [&str; 3] {
        [&self.name, &self.email, &self.position]
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, UserStatus::Active)
    }
}
