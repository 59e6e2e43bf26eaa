use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    list::PaginatedList,
    user::{query::UserListQuery, User},
};
use kernel::query::{matches_term, sort_and_paginate};
use kernel::repository::user::UserRepository;
use shared::error::AppResult;

use crate::datastore::{model::user::UsersDocument, JsonDataStore};

#[derive(new)]
pub struct UserRepositoryImpl {
    store: JsonDataStore,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_all(&self, query: UserListQuery) -> AppResult<PaginatedList<User>> {
        let UserListQuery {
            filter,
            search_term,
            sort_field,
            sort_order,
            pagination,
        } = query;

        let users: Vec<User> = UsersDocument::load(&self.store)
            .await?
            .into_iter()
            .filter(|user| filter.matches(user))
            .filter(|user| {
                search_term
                    .as_deref()
                    .map_or(true, |term| matches_term(term, &user.search_fields()))
            })
            .collect();

        Ok(sort_and_paginate(
            users,
            |a, b| sort_field.compare(a, b),
            sort_order,
            pagination,
        ))
    }

    async fn find_by_id(&self, user_id: &UserId) -> AppResult<Option<User>> {
        let users = UsersDocument::load(&self.store).await?;
        Ok(users.into_iter().find(|user| user.id == *user_id))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = UsersDocument::load(&self.store).await?;
        Ok(users.into_iter().find(|user| user.email == email))
    }

    async fn find_departments(&self) -> AppResult<Vec<String>> {
        let users = UsersDocument::load(&self.store).await?;
        let mut departments: Vec<String> = users
            .into_iter()
            .map(|user| user.department)
            .filter(|department| !department.is_empty())
            .collect();
        departments.sort();
        departments.dedup();
        Ok(departments)
    }
}
