//! Status derivation from raw equipment rows

use crate::models::{Equipment, EquipmentRecord, EquipmentStatus};

/// Days without maintenance after which a unit is flagged for maintenance
pub const MAINTENANCE_THRESHOLD_DAYS: i64 = 30;

const NOT_AVAILABLE: &str = "N/A";
const DEFAULT_UPTIME: f64 = 100.0;

/// Derive the status of a row.
///
/// An open failure wins over overdue maintenance; anything else is operational.
/// Absent fields count as empty / zero.
pub fn derive_status(record: &EquipmentRecord) -> EquipmentStatus {
    if record.open_failure().is_some() {
        EquipmentStatus::Falla
    } else if record.days_since_maintenance.unwrap_or(0) > MAINTENANCE_THRESHOLD_DAYS {
        EquipmentStatus::Mantenimiento
    } else {
        EquipmentStatus::Operativo
    }
}

/// Build the dashboard view of a row
pub fn to_equipment(record: &EquipmentRecord) -> Equipment {
    Equipment {
        id: record.id,
        name: record.name.clone(),
        equipment_type: record.equipment_type,
        location: record.location.clone(),
        status: derive_status(record),
        last_maintenance: date_or_na(&record.last_maintenance),
        last_failure: date_or_na(&record.last_failure),
        failure_count: record.failure_count.unwrap_or(0),
        uptime: record.uptime.unwrap_or(DEFAULT_UPTIME),
    }
}

fn date_or_na(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EquipmentType;

    fn bare(id: i32) -> EquipmentRecord {
        EquipmentRecord {
            id,
            name: format!("Torniquete T-{:03}", id),
            equipment_type: EquipmentType::Torniquete,
            location: "Estación Central - Acceso Norte".to_string(),
            failure: None,
            days_since_maintenance: None,
            anomaly: None,
            last_maintenance: None,
            last_failure: None,
            failure_count: None,
            uptime: None,
        }
    }

    #[test]
    fn test_defaults_are_operational() {
        assert_eq!(derive_status(&bare(1)), EquipmentStatus::Operativo);
    }

    #[test]
    fn test_failure_has_priority() {
        let mut record = bare(1);
        record.failure = Some("Sensor de paso".to_string());
        record.days_since_maintenance = Some(90);
        assert_eq!(derive_status(&record), EquipmentStatus::Falla);
    }

    #[test]
    fn test_blank_failure_is_ignored() {
        let mut record = bare(1);
        record.failure = Some("   ".to_string());
        assert_eq!(derive_status(&record), EquipmentStatus::Operativo);
    }

    #[test]
    fn test_maintenance_threshold_is_exclusive() {
        let mut record = bare(1);
        record.days_since_maintenance = Some(30);
        assert_eq!(derive_status(&record), EquipmentStatus::Operativo);
        record.days_since_maintenance = Some(31);
        assert_eq!(derive_status(&record), EquipmentStatus::Mantenimiento);
    }

    #[test]
    fn test_to_equipment_fills_defaults() {
        let equipment = to_equipment(&bare(4));
        assert_eq!(equipment.last_maintenance, "N/A");
        assert_eq!(equipment.last_failure, "N/A");
        assert_eq!(equipment.failure_count, 0);
        assert_eq!(equipment.uptime, 100.0);
        assert_eq!(equipment.status, EquipmentStatus::Operativo);
    }
}
