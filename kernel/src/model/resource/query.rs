use std::cmp::Ordering;

use strum::EnumString;

use super::{Resource, ResourceStatus, ResourceType};
use crate::model::list::{Pagination, SortOrder};

#[derive(Debug)]
pub struct ResourceListQuery {
    pub filter: ResourceFilter,
    pub search_term: Option<String>,
    pub sort_field: ResourceSortField,
    pub sort_order: SortOrder,
    pub pagination: Pagination,
}

#[derive(Debug, Default)]
pub struct ResourceFilter {
    pub status: Option<ResourceStatus>,
    pub resource_type: Option<ResourceType>,
    pub assignable_only: bool,
}

impl ResourceFilter {
    pub fn matches(&self, resource: &Resource) -> bool {
        if let Some(status) = self.status {
            if resource.status != status {
                return false;
            }
        }
        if let Some(resource_type) = self.resource_type {
            if resource.resource_type != resource_type {
                return false;
            }
        }
        if self.assignable_only && !resource.is_assignable() {
            return false;
        }
        true
    }
}

#[derive(Debug, Clone, Copy, Default, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum ResourceSortField {
    #[default]
    Name,
    Type,
    Status,
}

impl ResourceSortField {
    pub fn compare(self, a: &Resource, b: &Resource) -> Ordering {
        match self {
            ResourceSortField::Name => a.name.cmp(&b.name),
            ResourceSortField::Type => a.resource_type.as_ref().cmp(b.resource_type.as_ref()),
            ResourceSortField::Status => a.status.as_ref().cmp(b.status.as_ref()),
        }
    }
}
