use kernel::model::{
    booking::{Booking, BookingStatus},
    id::{BookingId, ResourceId, RoomId, UserId},
    time::Timestamp,
};
use serde::Deserialize;
use shared::error::AppResult;

use crate::datastore::JsonDataStore;

pub(crate) const BOOKINGS_FILE: &str = "bookings.json";

#[derive(Debug, Deserialize)]
pub struct BookingsDocument {
    pub bookings: Vec<BookingRow>,
}

impl BookingsDocument {
    pub(crate) async fn load(store: &JsonDataStore) -> AppResult<Vec<Booking>> {
        let doc: Self = store.load(BOOKINGS_FILE).await?;
        Ok(doc.bookings.into_iter().map(Booking::from).collect())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRow {
    pub id: BookingId,
    pub room_id: RoomId,
    pub user_id: UserId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    #[serde(default)]
    pub attendees: Vec<UserId>,
    #[serde(default)]
    pub resources: Vec<ResourceId>,
    pub status: BookingStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub recurring: bool,
    pub recurrence_pattern: Option<String>,
    pub recurrence_end_date: Option<Timestamp>,
    #[serde(default)]
    pub notes: String,
    pub cancellation_reason: Option<String>,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            id,
            room_id,
            user_id,
            title,
            description,
            start_time,
            end_time,
            attendees,
            resources,
            status,
            created_at,
            updated_at,
            recurring,
            recurrence_pattern,
            recurrence_end_date,
            notes,
            cancellation_reason,
        } = value;
        Booking {
            id,
            room_id,
            user_id,
            title,
            description,
            start_time,
            end_time,
            attendees,
            resources,
            status,
            created_at,
            updated_at,
            recurring,
            recurrence_pattern,
            recurrence_end_date,
            notes,
            cancellation_reason,
        }
    }
}
