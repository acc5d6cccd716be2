//! Dashboard metrics and summaries

use std::sync::Arc;

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{EquipmentRecord, EquipmentStatus, EquipmentType},
    repository::RecordStore,
};

use super::status::derive_status;

/// Reported model accuracy. Not computed from data.
pub const SYSTEM_ACCURACY: f64 = 94.5;
/// Reported average response time. Not computed from data.
pub const AVG_RESPONSE_TIME: &str = "96.8%";

/// Headline numbers of the dashboard
#[derive(Debug, Serialize, ToSchema)]
pub struct MetricsResponse {
    pub total_equipments: usize,
    /// Equipment currently in failure
    pub active_alerts: usize,
    /// Failure plus maintenance-pending equipment
    pub predicted_failures: usize,
    pub maintenance_scheduled: usize,
    pub system_accuracy: f64,
    pub avg_response_time: String,
}

/// Equipment count per type
#[derive(Debug, Serialize, ToSchema)]
pub struct TypeSummary {
    pub torniquetes: usize,
    pub transbank: usize,
}

/// Equipment count per status
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct StatusSummary {
    pub operativo: usize,
    pub falla: usize,
    pub mantenimiento: usize,
}

impl StatusSummary {
    fn from_records(records: &[EquipmentRecord]) -> Self {
        records
            .iter()
            .fold(Self::default(), |mut summary, record| {
                match derive_status(record) {
                    EquipmentStatus::Operativo => summary.operativo += 1,
                    EquipmentStatus::Falla => summary.falla += 1,
                    EquipmentStatus::Mantenimiento => summary.mantenimiento += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.operativo + self.falla + self.mantenimiento
    }
}

#[derive(Clone)]
pub struct MetricsService {
    store: Arc<dyn RecordStore>,
}

impl MetricsService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn metrics(&self) -> AppResult<MetricsResponse> {
        let records = self.store.list().await?;
        let summary = StatusSummary::from_records(&records);

        Ok(MetricsResponse {
            total_equipments: records.len(),
            active_alerts: summary.falla,
            predicted_failures: summary.falla + summary.mantenimiento,
            maintenance_scheduled: summary.mantenimiento,
            system_accuracy: SYSTEM_ACCURACY,
            avg_response_time: AVG_RESPONSE_TIME.to_string(),
        })
    }

    pub async fn type_summary(&self) -> AppResult<TypeSummary> {
        let records = self.store.list().await?;
        let count = |t: EquipmentType| records.iter().filter(|r| r.equipment_type == t).count();

        Ok(TypeSummary {
            torniquetes: count(EquipmentType::Torniquete),
            transbank: count(EquipmentType::Transbank),
        })
    }

    pub async fn status_summary(&self) -> AppResult<StatusSummary> {
        let records = self.store.list().await?;
        Ok(StatusSummary::from_records(&records))
    }
}
