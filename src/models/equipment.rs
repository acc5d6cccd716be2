//! Equipment model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::{EquipmentStatus, EquipmentType};

/// Raw equipment row as held by a record store.
///
/// Status is never stored here; it is derived from `failure` and
/// `days_since_maintenance` every time the row is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,
    pub location: String,
    /// Failure indicator: description of the open failure, if any
    #[serde(default)]
    pub failure: Option<String>,
    #[serde(default)]
    pub days_since_maintenance: Option<i64>,
    /// Anomaly flag raised by field telemetry
    #[serde(default)]
    pub anomaly: Option<bool>,
    #[serde(default)]
    pub last_maintenance: Option<String>,
    #[serde(default)]
    pub last_failure: Option<String>,
    #[serde(default)]
    pub failure_count: Option<u32>,
    #[serde(default)]
    pub uptime: Option<f64>,
}

impl EquipmentRecord {
    /// Open failure description, ignoring blank values
    pub fn open_failure(&self) -> Option<&str> {
        self.failure
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
    }
}

/// Equipment as exposed to the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    pub id: i32,
    /// Display name (e.g. "Torniquete T-001")
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,
    pub location: String,
    pub status: EquipmentStatus,
    /// ISO date or "N/A"
    pub last_maintenance: String,
    /// ISO date or "N/A"
    pub last_failure: String,
    pub failure_count: u32,
    /// Availability percentage
    pub uptime: f64,
}

/// Entry of the failure history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FailureEvent {
    pub id: i32,
    pub date: String,
    /// Name of the affected equipment
    pub equipment: String,
    pub failure_type: Option<String>,
    pub resolved: bool,
}

/// Maintenance scheduling request. Acknowledged, never stored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MaintenanceRequest {
    pub equipment_id: i32,
    pub scheduled_date: String,
    pub maintenance_type: String,
    pub notes: Option<String>,
}
