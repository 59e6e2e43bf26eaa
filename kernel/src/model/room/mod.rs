pub mod query;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::model::id::RoomId;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: u32,
    pub location: String,
    pub features: Vec<String>,
    pub hourly_rate: f64,
    /// 曜日名 → その日に予約を受け付ける "HH:MM-HH:MM" 形式の時間帯
    pub availability: HashMap<String, Vec<String>>,
    pub image: String,
    pub status: RoomStatus,
}

impl Room {
    /// 検索語の照合対象となるフィールド
    pub fn search_fields(&self) -> [&str; 2] {
        [&self.name, &self.location]
    }

    /// 新規予約を受け付けられる状態か
    pub fn is_bookable(&self) -> bool {
        matches!(self.status, RoomStatus::Available)
    }
}
