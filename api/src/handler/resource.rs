use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::{
    id::ResourceId,
    resource::query::ResourceListQuery,
    time::{TimeWindow, Timestamp},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::resource::{
    CheckResourcesRequest, PaginatedResourcesResponse, ResourceAvailabilityResponse,
    ResourceListQueryParams, ResourceResponse,
};

pub async fn show_resource_list(
    Query(params): Query<ResourceListQueryParams>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PaginatedResourcesResponse>> {
    params.validate(&())?;
    let query = ResourceListQuery::try_from(params)?;

    registry
        .resource_repository()
        .find_all(query)
        .await
        .map(PaginatedResourcesResponse::from)
        .map(Json)
}

pub async fn show_resource(
    Path(resource_id): Path<ResourceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ResourceResponse>> {
    registry
        .resource_repository()
        .find_by_id(&resource_id)
        .await
        .and_then(|resource| match resource {
            Some(resource) => Ok(Json(resource.into())),
            None => Err(AppError::EntityNotFound(format!(
                "resource ({resource_id}) not found"
            ))),
        })
}

/// 予約フォームで選択されたリソース群の一括確認。
/// 時間帯は妥当性チェックのみで、リソース同士の時間帯競合は判定しない。
pub async fn check_resources_availability(
    State(registry): State<AppRegistry>,
    Json(req): Json<CheckResourcesRequest>,
) -> AppResult<Json<ResourceAvailabilityResponse>> {
    req.validate(&())?;
    let CheckResourcesRequest {
        resource_ids,
        start_time,
        end_time,
    } = req;

    // start < end の検査だけに使う
    TimeWindow::new(Timestamp::new(start_time), Timestamp::new(end_time))?;

    let resource_ids: Vec<ResourceId> = resource_ids.into_iter().map(ResourceId::new).collect();
    registry
        .resource_repository()
        .check_availability(&resource_ids)
        .await
        .map(ResourceAvailabilityResponse::from)
        .map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapter::datastore::JsonDataStore;
    use tempfile::TempDir;

    const RESOURCES_JSON: &str = r#"{
      "resources": [
        {
          "id": "resource-1",
          "name": "Projector",
          "type": "equipment",
          "quantity": 3,
          "status": "available",
          "assignable": true
        },
        {
          "id": "resource-2",
          "name": "Catering",
          "type": "service",
          "quantity": null,
          "status": "maintenance",
          "assignable": true
        }
      ]
    }"#;

    fn registry() -> (TempDir, AppRegistry) {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("resources.json"), RESOURCES_JSON).unwrap();
        let registry = AppRegistry::new(JsonDataStore::new(dir.path()));
        (dir, registry)
    }

    #[tokio::test]
    async fn reports_resources_under_maintenance() -> anyhow::Result<()> {
        let (_dir, registry) = registry();

        let Json(response) = check_resources_availability(
            State(registry),
            Json(CheckResourcesRequest {
                resource_ids: vec!["resource-1".into(), "resource-2".into()],
                start_time: "2025-04-01T09:00".into(),
                end_time: "2025-04-01T10:00".into(),
            }),
        )
        .await?;

        assert!(!response.available);
        assert_eq!(response.unavailable_resources.len(), 1);
        assert_eq!(response.unavailable_resources[0].name, "Catering");
        Ok(())
    }

    #[tokio::test]
    async fn rejects_window_ending_before_it_starts() {
        let (_dir, registry) = registry();

        let result = check_resources_availability(
            State(registry),
            Json(CheckResourcesRequest {
                resource_ids: vec!["resource-1".into()],
                start_time: "2025-04-01T10:00".into(),
                end_time: "2025-04-01T09:00".into(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::UnprocessableEntity(_))));
    }
}
