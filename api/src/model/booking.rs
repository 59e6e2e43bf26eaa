use garde::Validate;
use kernel::model::{
    booking::{
        query::{BookingFilter, BookingListQuery},
        Booking, BookingStatus,
    },
    id::{BookingId, ResourceId, RoomId, UserId},
    list::{PaginatedList, Pagination},
    time::Timestamp,
};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

use super::{non_blank, parse_param, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingListQueryParams {
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
    pub status: Option<String>,
    #[garde(skip)]
    pub room_id: Option<String>,
    #[garde(skip)]
    pub user_id: Option<String>,
    #[garde(skip)]
    pub start_date: Option<String>,
    #[garde(skip)]
    pub end_date: Option<String>,
}

impl Default for BookingListQueryParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            search_term: None,
            sort_field: None,
            sort_order: None,
            status: None,
            room_id: None,
            user_id: None,
            start_date: None,
            end_date: None,
        }
    }
}

impl TryFrom<BookingListQueryParams> for BookingListQuery {
    type Error = AppError;

    fn try_from(value: BookingListQueryParams) -> Result<Self, Self::Error> {
        let BookingListQueryParams {
            page,
            page_size,
            search_term,
            sort_field,
            sort_order,
            status,
            room_id,
            user_id,
            start_date,
            end_date,
        } = value;
        Ok(BookingListQuery {
            filter: BookingFilter {
                status: parse_param("status", status)?,
                room_id: non_blank(room_id).map(RoomId::new),
                user_id: non_blank(user_id).map(UserId::new),
                start_date: non_blank(start_date).map(Timestamp::new),
                end_date: non_blank(end_date).map(Timestamp::new),
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
pub struct BookingResponse {
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

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
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
        Self {
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

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedBookingsResponse {
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub items: Vec<BookingResponse>,
}

impl From<PaginatedList<Booking>> for PaginatedBookingsResponse {
    fn from(value: PaginatedList<Booking>) -> Self {
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
            items: items.into_iter().map(BookingResponse::from).collect(),
        }
    }
}
