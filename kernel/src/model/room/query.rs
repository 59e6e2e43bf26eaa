use std::cmp::Ordering;

use strum::EnumString;

use super::{Room, RoomStatus};
use crate::model::list::{Pagination, SortOrder};

#[derive(Debug)]
pub struct RoomListQuery {
    pub filter: RoomFilter,
    pub search_term: Option<String>,
    pub sort_field: RoomSortField,
    pub sort_order: SortOrder,
    pub pagination: Pagination,
}

/// 部屋一覧で受け付けるフィルタの全量。複数指定時は AND で絞り込む。
#[derive(Debug, Default)]
pub struct RoomFilter {
    pub status: Option<RoomStatus>,
    pub min_capacity: Option<u32>,
}

impl RoomFilter {
    pub fn matches(&self, room: &Room) -> bool {
        if let Some(status) = self.status {
            if room.status != status {
                return false;
            }
        }
        if let Some(min_capacity) = self.min_capacity {
            if room.capacity < min_capacity {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, Default, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum RoomSortField {
    #[default]
    Name,
    Capacity,
    Location,
    HourlyRate,
    Status,
}

impl RoomSortField {
    /// 昇順での比較。降順はパイプライン側で反転する。
    pub fn compare(self, a: &Room, b: &Room) -> Ordering {
        match self {
            RoomSortField::Name => a.name.cmp(&b.name),
            RoomSortField::Capacity => a.capacity.cmp(&b.capacity),
            RoomSortField::Location => a.location.cmp(&b.location),
            RoomSortField::HourlyRate => a.hourly_rate.total_cmp(&b.hourly_rate),
            RoomSortField::Status => a.status.as_ref().cmp(b.status.as_ref()),
        }
    }
}
