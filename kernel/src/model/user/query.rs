use std::cmp::Ordering;

use strum::EnumString;

use super::{Role, User, UserStatus};
use crate::model::list::{Pagination, SortOrder};

#[derive(Debug)]
pub struct UserListQuery {
    pub filter: UserFilter,
    pub search_term: Option<String>,
    pub sort_field: UserSortField,
    pub sort_order: SortOrder,
    pub pagination: Pagination,
}

#[derive(Debug, Default)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub department: Option<String>,
    pub status: Option<UserStatus>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        if let Some(role) = self.role {
            if user.role != role {
                return false;
            }
        }
        if let Some(department) = &self.department {
            if user.department != *department {
                return false;
            }
        }
        if let Some(status) = self.status {
            if user.status != status {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, Default, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum UserSortField {
    #[default]
    Name,
    Email,
    Role,
    Department,
    Status,
}

impl UserSortField {
    pub fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            UserSortField::Name => a.name.cmp(&b.name),
            UserSortField::Email => a.email.cmp(&b.email),
            UserSortField::Role => a.role.as_ref().cmp(b.role.as_ref()),
            UserSortField::Department => a.department.cmp(&b.department),
            UserSortField::Status => a.status.as_ref().cmp(b.status.as_ref()),
        }
    }
}
