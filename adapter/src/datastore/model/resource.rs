use kernel::model::{
    id::ResourceId,
    resource::{Resource, ResourceStatus, ResourceType},
    time::Timestamp,
};
use serde::Deserialize;
use shared::error::AppResult;

use crate::datastore::JsonDataStore;

pub(crate) const RESOURCES_FILE: &str = "resources.json";

#[derive(Debug, Deserialize)]
pub struct ResourcesDocument {
    pub resources: Vec<ResourceRow>,
}

impl ResourcesDocument {
    pub(crate) async fn load(store: &JsonDataStore) -> AppResult<Vec<Resource>> {
        let doc: Self = store.load(RESOURCES_FILE).await?;
        Ok(doc.resources.into_iter().map(Resource::from).collect())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRow {
    pub id: ResourceId,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub description: String,
    pub quantity: Option<u32>,
    pub status: ResourceStatus,
    pub location: Option<String>,
    pub last_maintenance: Option<Timestamp>,
    pub next_maintenance: Option<Timestamp>,
    #[serde(default)]
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

impl From<ResourceRow> for Resource {
    fn from(value: ResourceRow) -> Self {
        let ResourceRow {
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
        Resource {
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
