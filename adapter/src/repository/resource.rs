use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::ResourceId,
    list::PaginatedList,
    resource::{query::ResourceListQuery, Resource, ResourceAvailability},
};
use kernel::query::{matches_term, sort_and_paginate};
use kernel::repository::resource::ResourceRepository;
use shared::error::AppResult;

use crate::datastore::{model::resource::ResourcesDocument, JsonDataStore};

#[derive(new)]
pub struct ResourceRepositoryImpl {
    store: JsonDataStore,
}

#[async_trait]
impl ResourceRepository for ResourceRepositoryImpl {
    async fn find_all(&self, query: ResourceListQuery) -> AppResult<PaginatedList<Resource>> {
        let ResourceListQuery {
            filter,
            search_term,
            sort_field,
            sort_order,
            pagination,
        } = query;

        let resources: Vec<Resource> = ResourcesDocument::load(&self.store)
            .await?
            .into_iter()
            .filter(|resource| filter.matches(resource))
            .filter(|resource| {
                search_term
                    .as_deref()
                    .map_or(true, |term| matches_term(term, &resource.search_fields()))
            })
            .collect();

        Ok(sort_and_paginate(
            resources,
            |a, b| sort_field.compare(a, b),
            sort_order,
            pagination,
        ))
    }

    async fn find_by_id(&self, resource_id: &ResourceId) -> AppResult<Option<Resource>> {
        let resources = ResourcesDocument::load(&self.store).await?;
        Ok(resources
            .into_iter()
            .find(|resource| resource.id == *resource_id))
    }

    async fn check_availability(
        &self,
        resource_ids: &[ResourceId],
    ) -> AppResult<ResourceAvailability> {
        let resources = ResourcesDocument::load(&self.store).await?;
        let unavailable_resources: Vec<Resource> = resources
            .into_iter()
            .filter(|resource| resource_ids.contains(&resource.id))
            .filter(|resource| !resource.is_assignable())
            .collect();

        Ok(ResourceAvailability {
            available: unavailable_resources.is_empty(),
            unavailable_resources,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixtures::{datastore_with, RESOURCES_JSON};
    use kernel::model::{
        list::{Pagination, SortOrder},
        resource::query::{ResourceFilter, ResourceSortField},
        resource::ResourceType,
    };

    fn repo() -> (tempfile::TempDir, ResourceRepositoryImpl) {
        let (dir, store) = datastore_with(&[("resources.json", RESOURCES_JSON)]);
        (dir, ResourceRepositoryImpl::new(store))
    }

    #[tokio::test]
    async fn assignable_only_excludes_fixed_and_unavailable() -> AppResult<()> {
        let (_dir, repo) = repo();

        let result = repo
            .find_all(ResourceListQuery {
                filter: ResourceFilter {
                    status: None,
                    resource_type: None,
                    assignable_only: true,
                },
                search_term: None,
                sort_field: ResourceSortField::Name,
                sort_order: SortOrder::Asc,
                pagination: Pagination {
                    page: 1,
                    page_size: 10,
                },
            })
            .await?;

        // resource-2 はメンテナンス中、resource-3 は assignable=false
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].id.as_str(), "resource-1");
        Ok(())
    }

    #[tokio::test]
    async fn type_filter_narrows_to_services() -> AppResult<()> {
        let (_dir, repo) = repo();

        let result = repo
            .find_all(ResourceListQuery {
                filter: ResourceFilter {
                    resource_type: Some(ResourceType::Service),
                    ..Default::default()
                },
                search_term: None,
                sort_field: ResourceSortField::Name,
                sort_order: SortOrder::Asc,
                pagination: Pagination {
                    page: 1,
                    page_size: 10,
                },
            })
            .await?;

        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].name, "Catering");
        Ok(())
    }

    #[tokio::test]
    async fn availability_reports_unassignable_resources() -> AppResult<()> {
        let (_dir, repo) = repo();

        let result = repo
            .check_availability(&[
                ResourceId::new("resource-1"),
                ResourceId::new("resource-2"),
                ResourceId::new("resource-3"),
            ])
            .await?;

        assert!(!result.available);
        let ids: Vec<&str> = result
            .unavailable_resources
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["resource-2", "resource-3"]);
        Ok(())
    }

    #[tokio::test]
    async fn availability_skips_unknown_ids() -> AppResult<()> {
        let (_dir, repo) = repo();

        let result = repo
            .check_availability(&[ResourceId::new("resource-1"), ResourceId::new("resource-99")])
            .await?;

        assert!(result.available);
        assert!(result.unavailable_resources.is_empty());
        Ok(())
    }
}
