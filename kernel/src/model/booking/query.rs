use std::cmp::Ordering;

use strum::EnumString;

use super::{Booking, BookingStatus};
use crate::model::{
    id::{RoomId, UserId},
    list::{Pagination, SortOrder},
    time::Timestamp,
};

#[derive(Debug)]
pub struct BookingListQuery {
    pub filter: BookingFilter,
    pub search_term: Option<String>,
    pub sort_field: BookingSortField,
    pub sort_order: SortOrder,
    pub pagination: Pagination,
}

/// 予約一覧で受け付けるフィルタの全量。
/// user_id は作成者だけでなく参加者にもマッチする。
/// start_date / end_date は予約時間帯を日付境界で挟み込む。
#[derive(Debug, Default)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub room_id: Option<RoomId>,
    pub user_id: Option<UserId>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

impl BookingFilter {
    pub fn matches(&self, booking: &Booking) -> bool {
        if let Some(status) = self.status {
            if booking.status != status {
                return false;
            }
        }
        if let Some(room_id) = &self.room_id {
            if booking.room_id != *room_id {
                return false;
            }
        }
        if let Some(user_id) = &self.user_id {
            if !booking.involves_user(user_id) {
                return false;
            }
        }
        if let Some(start_date) = &self.start_date {
            if booking.start_time < *start_date {
                return false;
            }
        }
        if let Some(end_date) = &self.end_date {
            if booking.end_time > *end_date {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, Default, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum BookingSortField {
    #[default]
    StartTime,
    EndTime,
    Title,
    Status,
    CreatedAt,
}

impl BookingSortField {
    pub fn compare(self, a: &Booking, b: &Booking) -> Ordering {
        match self {
            BookingSortField::StartTime => a.start_time.cmp(&b.start_time),
            BookingSortField::EndTime => a.end_time.cmp(&b.end_time),
            BookingSortField::Title => a.title.cmp(&b.title),
            BookingSortField::Status => a.status.as_ref().cmp(b.status.as_ref()),
            BookingSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}
