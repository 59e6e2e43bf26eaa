use garde::Validate;
use kernel::model::{
    id::UserId,
    list::{PaginatedList, Pagination},
    time::Timestamp,
    user::{
        query::{UserFilter, UserListQuery},
        Role, User, UserStatus,
    },
};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

use super::{non_blank, parse_param, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UserListQueryParams {
    #[garde(range(min = 1))]
    pub page: u32,
    #[garde(range(min = 1, max = 100))]
    pub page_size: u32,
    #[garde(skip)]
    pub search_term: Option<String>,
    #[garde(skip)]
    pub sort_field: Option<String>,
    #[garde(skip)]
    pub sort_order: Option<String>,
    #[garde(skip)]
    pub role: Option<String>,
    #[garde(skip)]
    pub department: Option<String>,
    #[garde(skip)]
    pub status: Option<String>,
}

impl Default for UserListQueryParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            search_term: None,
            sort_field: None,
            sort_order: None,
            role: None,
            department: None,
            status: None,
        }
    }
}

impl TryFrom<UserListQueryParams> for UserListQuery {
    type Error = AppError;

    fn try_from(value: UserListQueryParams) -> Result<Self, Self::Error> {
        let UserListQueryParams {
            page,
            page_size,
            search_term,
            sort_field,
            sort_order,
            role,
            department,
            status,
        } = value;
        Ok(UserListQuery {
            filter: UserFilter {
                role: parse_param("role", role)?,
                department: non_blank(department),
                status: parse_param("status", status)?,
            },
            search_term: non_blank(search_term),
            sort_field: parse_param("sortField", sort_field)?.unwrap_or_default(),
            sort_order: parse_param("sortOrder", sort_order)?.unwrap_or_default(),
            pagination: Pagination { page, page_size },
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
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

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
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
        Self {
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

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedUsersResponse {
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub items: Vec<UserResponse>,
}

impl From<PaginatedList<User>> for PaginatedUsersResponse {
    fn from(value: PaginatedList<User>) -> Self {
        let PaginatedList {
            total,
            page,
            page_size,
            items,
        } = value;
        Self {
            total,
            page,
            page_size,
            items: items.into_iter().map(UserResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentsResponse {
    pub departments: Vec<String>,
}
