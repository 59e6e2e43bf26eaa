use std::collections::HashMap;

use kernel::model::{
    id::RoomId,
    room::{Room, RoomStatus},
};
use serde::Deserialize;
use shared::error::AppResult;

use crate::datastore::JsonDataStore;

pub(crate) const ROOMS_FILE: &str = "rooms.json";

/// rooms.json のトップレベル構造
#[derive(Debug, Deserialize)]
pub struct RoomsDocument {
    pub rooms: Vec<RoomRow>,
}

impl RoomsDocument {
    pub(crate) async fn load(store: &JsonDataStore) -> AppResult<Vec<Room>> {
        let doc: Self = store.load(ROOMS_FILE).await?;
        Ok(doc.rooms.into_iter().map(Room::from).collect())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRow {
    pub id: RoomId,
    pub name: String,
    pub capacity: u32,
    pub location: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub hourly_rate: f64,
    #[serde(default)]
    pub availability: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub image: String,
    pub status: RoomStatus,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            id,
            name,
            capacity,
            location,
            features,
            hourly_rate,
            availability,
            image,
            status,
        } = value;
        Room {
            id,
            name,
            capacity,
            location,
            features,
            hourly_rate,
            availability,
            image,
            status,
        }
    }
}
