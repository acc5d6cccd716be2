//! Failure prediction model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::RiskLevel;

/// Failure-probability estimate for one piece of equipment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RiskEstimate {
    pub equipment_id: i32,
    pub equipment_name: String,
    /// Failure probability in percent, within [5, 95]
    pub probability: f64,
    pub risk_level: RiskLevel,
    /// Most likely failure for this kind of equipment
    pub predicted_failure: String,
    /// Within [0.85, 0.98]
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}
