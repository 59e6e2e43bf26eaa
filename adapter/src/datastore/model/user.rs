use kernel::model::{
    id::UserId,
    time::Timestamp,
    user::{Role, User, UserStatus},
};
use serde::Deserialize;
use shared::error::AppResult;

use crate::datastore::JsonDataStore;

pub(crate) const USERS_FILE: &str = "users.json";

#[derive(Debug, Deserialize)]
pub struct UsersDocument {
    pub users: Vec<UserRow>,
}

impl UsersDocument {
    pub(crate) async fn load(store: &JsonDataStore) -> AppResult<Vec<User>> {
        let doc: Self = store.load(USERS_FILE).await?;
        Ok(doc.users.into_iter().map(User::from).collect())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub profile_image: String,
    pub date_created: Timestamp,
    pub last_login: Timestamp,
    pub status: UserStatus,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            id,
            name,
            email,
            role,
            department,
            position,
            phone,
            profile_image,
            date_created,
            last_login,
            status,
        } = value;
        User {
            id,
            name,
            email,
            role,
            department,
            position,
            phone,
            profile_image,
            date_created,
            last_login,
            status,
        }
    }
}
