//! In-memory record store seeded with the demo network

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{not_found, RecordStore};
use crate::{
    config::StoreBackend,
    error::AppResult,
    models::{EquipmentRecord, EquipmentStatus, EquipmentType, FailureEvent},
    services::status::MAINTENANCE_THRESHOLD_DAYS,
};

const MANUAL_FAILURE: &str = "Falla reportada manualmente";

/// Process-wide fixture. Writers are serialized by the lock.
pub struct FixtureStore {
    equipments: RwLock<Vec<EquipmentRecord>>,
    failures: Vec<FailureEvent>,
}

impl FixtureStore {
    pub fn new(equipments: Vec<EquipmentRecord>, failures: Vec<FailureEvent>) -> Self {
        Self {
            equipments: RwLock::new(equipments),
            failures,
        }
    }

    /// Store holding the eight demo units and their failure history
    pub fn seeded() -> Self {
        Self::new(seed_equipments(), seed_failures())
    }
}

#[async_trait]
impl RecordStore for FixtureStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::Fixture
    }

    async fn list(&self) -> AppResult<Vec<EquipmentRecord>> {
        Ok(self.equipments.read().await.clone())
    }

    async fn get(&self, id: i32) -> AppResult<Option<EquipmentRecord>> {
        let equipments = self.equipments.read().await;
        Ok(equipments.iter().find(|e| e.id == id).cloned())
    }

    async fn failures(&self) -> AppResult<Vec<FailureEvent>> {
        Ok(self.failures.clone())
    }

    async fn set_status(&self, id: i32, status: EquipmentStatus) -> AppResult<bool> {
        let mut equipments = self.equipments.write().await;
        let record = equipments
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| not_found(id))?;

        // Rewrite the fields status is derived from, so reads stay consistent
        match status {
            EquipmentStatus::Falla => {
                if record.open_failure().is_none() {
                    record.failure = Some(MANUAL_FAILURE.to_string());
                }
            }
            EquipmentStatus::Mantenimiento => {
                record.failure = None;
                let days = record.days_since_maintenance.unwrap_or(0);
                if days <= MAINTENANCE_THRESHOLD_DAYS {
                    record.days_since_maintenance = Some(MAINTENANCE_THRESHOLD_DAYS + 1);
                }
            }
            EquipmentStatus::Operativo => {
                record.failure = None;
                record.days_since_maintenance = Some(0);
            }
        }

        tracing::info!("Equipment {} status set to {}", id, status);
        Ok(true)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: i32,
    name: &str,
    equipment_type: EquipmentType,
    location: &str,
    failure: Option<&str>,
    days_since_maintenance: i64,
    last_maintenance: &str,
    last_failure: &str,
    failure_count: u32,
    uptime: f64,
) -> EquipmentRecord {
    EquipmentRecord {
        id,
        name: name.to_string(),
        equipment_type,
        location: location.to_string(),
        failure: failure.map(str::to_string),
        days_since_maintenance: Some(days_since_maintenance),
        anomaly: Some(failure.is_some()),
        last_maintenance: Some(last_maintenance.to_string()),
        last_failure: Some(last_failure.to_string()),
        failure_count: Some(failure_count),
        uptime: Some(uptime),
    }
}

fn seed_equipments() -> Vec<EquipmentRecord> {
    use EquipmentType::{Torniquete, Transbank};

    // The maintenance counters are seeded to reproduce the dashboard's demo statuses
    // (unit 4 pending maintenance); they are not computed from `last_maintenance`.
    vec![
        record(
            1,
            "Torniquete T-001",
            Torniquete,
            "Estación Central - Acceso Norte",
            None,
            12,
            "2024-11-15",
            "2024-11-20",
            3,
            98.5,
        ),
        record(
            2,
            "Torniquete T-002",
            Torniquete,
            "Estación Central - Acceso Sur",
            None,
            7,
            "2024-11-20",
            "2024-12-01",
            1,
            99.2,
        ),
        record(
            3,
            "Transbank TB-001",
            Transbank,
            "Estación Central - Hall Principal",
            Some("Lector de tarjetas"),
            28,
            "2024-10-30",
            "2024-12-04",
            5,
            94.1,
        ),
        record(
            4,
            "Torniquete T-003",
            Torniquete,
            "Estación Los Héroes - Acceso Este",
            None,
            45,
            "2024-12-04",
            "2024-11-15",
            2,
            97.8,
        ),
        record(
            5,
            "Transbank TB-002",
            Transbank,
            "Estación Los Héroes - Boletería",
            None,
            12,
            "2024-11-25",
            "2024-10-28",
            2,
            96.5,
        ),
        record(
            6,
            "Torniquete T-004",
            Torniquete,
            "Estación Baquedano - Acceso Principal",
            None,
            9,
            "2024-11-28",
            "2024-11-30",
            1,
            99.0,
        ),
        record(
            7,
            "Transbank TB-003",
            Transbank,
            "Estación Baquedano - Autoservicio",
            None,
            27,
            "2024-11-10",
            "2024-11-10",
            4,
            95.3,
        ),
        record(
            8,
            "Torniquete T-005",
            Torniquete,
            "Estación Tobalaba - Acceso Oriente",
            Some("Motor de giro"),
            53,
            "2024-10-15",
            "2024-12-04",
            6,
            92.1,
        ),
    ]
}

fn event(id: i32, date: &str, equipment: &str, failure_type: &str, resolved: bool) -> FailureEvent {
    FailureEvent {
        id,
        date: date.to_string(),
        equipment: equipment.to_string(),
        failure_type: Some(failure_type.to_string()),
        resolved,
    }
}

fn seed_failures() -> Vec<FailureEvent> {
    vec![
        event(1, "2024-12-04", "Transbank TB-001", "Lector de tarjetas", false),
        event(2, "2024-12-04", "Torniquete T-005", "Motor de giro", false),
        event(3, "2024-12-03", "Torniquete T-002", "Sensor de paso", true),
        event(4, "2024-12-02", "Transbank TB-003", "Pantalla táctil", true),
        event(5, "2024-12-01", "Torniquete T-001", "Brazo mecánico", true),
        event(6, "2024-11-30", "Torniquete T-004", "Lector BIP", true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let store = FixtureStore::seeded();
        let records = tokio_test::block_on(store.list()).unwrap();
        let mut ids: Vec<i32> = records.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[tokio::test]
    async fn test_seed_reproduces_demo_statuses() {
        use crate::services::status::derive_status;

        let store = FixtureStore::seeded();
        for row in store.list().await.unwrap() {
            let expected = match row.id {
                3 | 8 => EquipmentStatus::Falla,
                4 => EquipmentStatus::Mantenimiento,
                _ => EquipmentStatus::Operativo,
            };
            assert_eq!(derive_status(&row), expected, "equipment {}", row.id);
        }
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let store = FixtureStore::seeded();
        assert!(store.get(9999).await.unwrap().is_none());
        assert!(store.get(3).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_set_status_rewrites_derivation_fields() {
        let store = FixtureStore::seeded();

        store.set_status(1, EquipmentStatus::Falla).await.unwrap();
        let row = store.get(1).await.unwrap().unwrap();
        assert_eq!(row.open_failure(), Some(MANUAL_FAILURE));

        store.set_status(1, EquipmentStatus::Mantenimiento).await.unwrap();
        let row = store.get(1).await.unwrap().unwrap();
        assert!(row.open_failure().is_none());
        assert!(row.days_since_maintenance.unwrap() > MAINTENANCE_THRESHOLD_DAYS);

        store.set_status(1, EquipmentStatus::Operativo).await.unwrap();
        let row = store.get(1).await.unwrap().unwrap();
        assert!(row.open_failure().is_none());
        assert_eq!(row.days_since_maintenance, Some(0));
    }

    #[tokio::test]
    async fn test_set_status_keeps_existing_failure() {
        let store = FixtureStore::seeded();
        store.set_status(3, EquipmentStatus::Falla).await.unwrap();
        let row = store.get(3).await.unwrap().unwrap();
        assert_eq!(row.open_failure(), Some("Lector de tarjetas"));
    }

    #[tokio::test]
    async fn test_set_status_unknown_id() {
        let store = FixtureStore::seeded();
        let result = store.set_status(9999, EquipmentStatus::Operativo).await;
        assert!(matches!(result, Err(crate::error::AppError::NotFound(_))));
    }
}
