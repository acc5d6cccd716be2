//! Equipment service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Equipment, EquipmentStatus, FailureEvent, MaintenanceRequest},
    repository::{not_found, RecordStore},
};

use super::status::to_equipment;

/// Filter value selecting every equipment type
pub const ALL_TYPES: &str = "all";

/// Outcome of a status update
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub status: EquipmentStatus,
    /// False when the backing store is read-only and the change was dropped
    pub persisted: bool,
}

#[derive(Clone)]
pub struct EquipmentService {
    store: Arc<dyn RecordStore>,
}

impl EquipmentService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// List equipment, optionally restricted to one type (`all` or empty means no filter)
    pub async fn list(&self, equipment_type: Option<&str>) -> AppResult<Vec<Equipment>> {
        let records = self.store.list().await?;
        let wanted = equipment_type.filter(|t| !t.is_empty() && *t != ALL_TYPES);

        Ok(records
            .iter()
            .filter(|r| wanted.map_or(true, |t| r.equipment_type.as_str() == t))
            .map(to_equipment)
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        self.store
            .get(id)
            .await?
            .map(|r| to_equipment(&r))
            .ok_or_else(|| not_found(id))
    }

    pub async fn failures(&self) -> AppResult<Vec<FailureEvent>> {
        self.store.failures().await
    }

    /// Validate and apply a status change. Unknown ids are reported before bad values.
    pub async fn update_status(&self, id: i32, status: &str) -> AppResult<StatusChange> {
        if self.store.get(id).await?.is_none() {
            return Err(not_found(id));
        }
        let status: EquipmentStatus = status.parse().map_err(AppError::Validation)?;
        let persisted = self.store.set_status(id, status).await?;
        Ok(StatusChange { status, persisted })
    }

    /// Acknowledge a maintenance request. Nothing is stored.
    pub fn schedule_maintenance(&self, request: &MaintenanceRequest) {
        tracing::info!(
            equipment_id = request.equipment_id,
            scheduled_date = %request.scheduled_date,
            maintenance_type = %request.maintenance_type,
            notes = request.notes.as_deref().unwrap_or(""),
            "Maintenance request acknowledged"
        );
    }
}
