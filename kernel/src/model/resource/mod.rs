pub mod query;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::model::{id::ResourceId, time::Timestamp};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResourceType {
    Equipment,
    Service,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResourceStatus {
    Available,
    Maintenance,
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
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

impl Resource {
    pub fn search_fields(&self) -> [&str; 2] {
        [&self.name, &self.description]
    }

    /// 予約に割り当てられる状態か。時間帯ベースの競合はここでは見ない。
    pub fn is_assignable(&self) -> bool {
        matches!(self.status, ResourceStatus::Available) && self.assignable
    }
}

/// リソース群の一括空き確認の結果
#[derive(Debug)]
pub struct ResourceAvailability {
    pub available: bool,
    pub unavailable_resources: Vec<Resource>,
}
