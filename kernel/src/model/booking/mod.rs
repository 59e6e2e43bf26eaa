pub mod query;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::model::{
    id::{BookingId, ResourceId, RoomId, UserId},
    time::{TimeWindow, Timestamp},
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Booking {
    pub id: BookingId,
    pub room_id: RoomId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub attendees: Vec<UserId>,
    pub resources: Vec<ResourceId>,
    pub status: BookingStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub recurring: bool,
    pub recurrence_pattern: Option<String>,
    pub recurrence_end_date: Option<Timestamp>,
    pub notes: String,
    pub cancellation_reason: Option<String>,
}

impl Booking {
    pub fn search_fields(&self) -> [&str; 3] {
        [&self.title, &self.description, &self.notes]
    }

    /// 空き確認の対象となるのは confirmed の予約のみ
    pub fn is_confirmed(&self) -> bool {
        matches!(self.status, BookingStatus::Confirmed)
    }

    /// 作成者または参加者として予約に関わっているか
    pub fn involves_user(&self, user_id: &UserId) -> bool {
        self.user_id == *user_id || self.attendees.contains(user_id)
    }

    /// 要求された時間帯とこの予約が交差するか
    pub fn conflicts_with(&self, window: &TimeWindow) -> bool {
        window.overlaps(&self.start_time, &self.end_time)
    }
}
