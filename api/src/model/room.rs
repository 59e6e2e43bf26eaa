use std::collections::HashMap;

use garde::Validate;
use kernel::model::{
    id::RoomId,
    list::{PaginatedList, Pagination},
    room::{
        query::{RoomFilter, RoomListQuery},
        Room, RoomStatus,
    },
};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

use super::{non_blank, parse_param, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomListQueryParams {
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
    pub min_capacity: Option<u32>,
}

impl Default for RoomListQueryParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            search_term: None,
            sort_field: None,
            sort_order: None,
            status: None,
            min_capacity: None,
        }
    }
}

impl TryFrom<RoomListQueryParams> for RoomListQuery {
    type Error = AppError;

    fn try_from(value: RoomListQueryParams) -> Result<Self, Self::Error> {
        let RoomListQueryParams {
            page,
            page_size,
            search_term,
            sort_field,
            sort_order,
            status,
            min_capacity,
        } = value;
        Ok(RoomListQuery {
            filter: RoomFilter {
                status: parse_param("status", status)?,
                // minCapacity=0 は制約なし
                min_capacity: min_capacity.filter(|capacity| *capacity > 0),
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
pub struct RoomResponse {
    pub id: RoomId,
    pub name: String,
    pub capacity: u32,
    pub location: String,
    pub features: Vec<String>,
    pub hourly_rate: f64,
    pub availability: HashMap<String, Vec<String>>,
    pub image: String,
    pub status: RoomStatus,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
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
        Self {
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

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedRoomsResponse {
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub items: Vec<RoomResponse>,
}

impl From<PaginatedList<Room>> for PaginatedRoomsResponse {
    fn from(value: PaginatedList<Room>) -> Self {
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
            items: items.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoomAvailabilityQueryParams {
    #[garde(length(min = 1))]
    pub start_time: String,
    #[garde(length(min = 1))]
    pub end_time: String,
    #[garde(skip)]
    #[serde(default)]
    pub exclude_booking_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAvailabilityResponse {
    pub room_id: RoomId,
    pub available: bool,
}
