//! Data models for ConectaSonda

pub mod enums;
pub mod equipment;
pub mod prediction;

// Re-export commonly used types
pub use enums::{EquipmentStatus, EquipmentType, RiskLevel};
pub use equipment::{Equipment, EquipmentRecord, FailureEvent, MaintenanceRequest};
pub use prediction::RiskEstimate;
