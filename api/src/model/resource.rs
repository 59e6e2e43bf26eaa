use garde::Validate;
use kernel::model::{
    id::ResourceId,
    list::{PaginatedList, Pagination},
    resource::{
        query::{ResourceFilter, ResourceListQuery},
        Resource, ResourceAvailability, ResourceStatus, ResourceType,
    },
    time::Timestamp,
};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

use super::{
    non_blank, parse_bool_param, parse_param, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceListQueryParams {
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
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    #[garde(skip)]
    pub assignable_only: Option<String>,
}

impl Default for ResourceListQueryParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            search_term: None,
            sort_field: None,
            sort_order: None,
            status: None,
            resource_type: None,
            assignable_only: None,
        }
    }
}

impl TryFrom<ResourceListQueryParams> for ResourceListQuery {
    type Error = AppError;

    fn try_from(value: ResourceListQueryParams) -> Result<Self, Self::Error> {
        let ResourceListQueryParams {
            page,
            page_size,
            search_term,
            sort_field,
            sort_order,
            status,
            resource_type,
            assignable_only,
        } = value;
        Ok(ResourceListQuery {
            filter: ResourceFilter {
                status: parse_param("status", status)?,
                resource_type: parse_param("type", resource_type)?,
                assignable_only: parse_bool_param("assignableOnly", assignable_only)?,
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
pub struct ResourceResponse {
    pub id: ResourceId,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub description: String,
    pub quantity: Option<u32>,
    pub status: ResourceStatus,
    pub location: Option<String>,
    pub last_maintenance: Option<Timestamp>,
    pub next_maintenance: Option<Timestamp>,
    pub image: String,
    pub assignable: bool,
    pub lead_time: Option<String>,
    pub provider: Option<String>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub cost: Option<f64>,
    pub cost_unit: Option<String>,
    pub notes: Option<String>,
}

impl From<Resource> for ResourceResponse {
    fn from(value: Resource) -> Self {
        let Resource {
            id,
            name,
            resource_type,
            description,
            quantity,
            status,
            location,
            last_maintenance,
            next_maintenance,
            image,
            assignable,
            lead_time,
            provider,
            contact_person,
            contact_email,
            cost,
            cost_unit,
            notes,
        } = value;
        Self {
            id,
            name,
            resource_type,
            description,
            quantity,
            status,
            location,
            last_maintenance,
            next_maintenance,
            image,
            assignable,
            lead_time,
            provider,
            contact_person,
            contact_email,
            cost,
            cost_unit,
            notes,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResourcesResponse {
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub items: Vec<ResourceResponse>,
}

impl From<PaginatedList<Resource>> for PaginatedResourcesResponse {
    fn from(value: PaginatedList<Resource>) -> Self {
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
            items: items.into_iter().map(ResourceResponse::from).collect(),
        }
    }
}

/// 複数リソースの一括空き確認。時間帯は妥当性の検査にのみ使う
/// （リソース側の予約競合は現仕様では見ない）。
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckResourcesRequest {
    #[garde(length(min = 1))]
    pub resource_ids: Vec<String>,
    #[garde(length(min = 1))]
    pub start_time: String,
    #[garde(length(min = 1))]
    pub end_time: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAvailabilityResponse {
    pub available: bool,
    pub unavailable_resources: Vec<ResourceResponse>,
}

impl From<ResourceAvailability> for ResourceAvailabilityResponse {
    fn from(value: ResourceAvailability) -> Self {
        let ResourceAvailability {
            available,
            unavailable_resources,
        } = value;
        Self {
            available,
            unavailable_resources: unavailable_resources
                .into_iter()
                .map(ResourceResponse::from)
                .collect(),
        }
    }
}
