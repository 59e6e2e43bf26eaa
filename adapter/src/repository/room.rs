use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::RoomId,
    list::PaginatedList,
    room::{query::RoomListQuery, Room},
};
use kernel::query::{matches_term, sort_and_paginate};
use kernel::repository::room::RoomRepository;
use shared::error::AppResult;

use crate::datastore::{model::room::RoomsDocument, JsonDataStore};

#[derive(new)]
pub struct RoomRepositoryImpl {
    store: JsonDataStore,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn find_all(&self, query: RoomListQuery) -> AppResult<PaginatedList<Room>> {
        let RoomListQuery {
            filter,
            search_term,
            sort_field,
            sort_order,
            pagination,
        } = query;

        let rooms: Vec<Room> = RoomsDocument::load(&self.store)
            .await?
            .into_iter()
            .filter(|room| filter.matches(room))
            .filter(|room| {
                search_term
                    .as_deref()
                    .map_or(true, |term| matches_term(term, &room.search_fields()))
            })
            .collect();

        Ok(sort_and_paginate(
            rooms,
            |a, b| sort_field.compare(a, b),
            sort_order,
            pagination,
        ))
    }

    async fn find_by_id(&self, room_id: &RoomId) -> AppResult<Option<Room>> {
        let rooms = RoomsDocument::load(&self.store).await?;
        Ok(rooms.into_iter().find(|room| room.id == *room_id))
    }
}
