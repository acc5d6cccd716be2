//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// EquipmentType
// ---------------------------------------------------------------------------

/// Kind of monitored equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentType {
    /// Turnstile / access gate
    Torniquete,
    /// Card-payment terminal
    Transbank,
}

impl EquipmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentType::Torniquete => "torniquete",
            EquipmentType::Transbank => "transbank",
        }
    }
}

impl std::fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Operational status, always derived from the underlying row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentStatus {
    Operativo,
    Falla,
    Mantenimiento,
}

impl EquipmentStatus {
    pub const ALL: [EquipmentStatus; 3] = [
        EquipmentStatus::Operativo,
        EquipmentStatus::Falla,
        EquipmentStatus::Mantenimiento,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Operativo => "operativo",
            EquipmentStatus::Falla => "falla",
            EquipmentStatus::Mantenimiento => "mantenimiento",
        }
    }
}

impl std::str::FromStr for EquipmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Estado inválido: {}", s))
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Qualitative risk label attached to a failure probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Bajo,
    Medio,
    Alto,
}

impl RiskLevel {
    /// Threshold a probability percentage: > 70 high, > 40 medium, else low
    pub fn from_probability(probability: f64) -> Self {
        if probability > 70.0 {
            RiskLevel::Alto
        } else if probability > 40.0 {
            RiskLevel::Medio
        } else {
            RiskLevel::Bajo
        }
    }
}
