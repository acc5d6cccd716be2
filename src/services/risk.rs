//! Failure risk estimation.
//!
//! There is no trained model behind this: the estimate is a heuristic base
//! score perturbed by a random offset. Handlers only see [`RiskEstimator`],
//! so a real model can replace [`HeuristicEstimator`] without touching them.

use std::sync::Arc;

use chrono::Utc;
use rand::{seq::SliceRandom, Rng};

use crate::{
    config::StoreBackend,
    error::AppResult,
    models::{EquipmentRecord, EquipmentType, RiskEstimate, RiskLevel},
    repository::{not_found, RecordStore},
};

pub const MIN_PROBABILITY: f64 = 5.0;
pub const MAX_PROBABILITY: f64 = 95.0;
pub const MIN_CONFIDENCE: f64 = 0.85;
pub const MAX_CONFIDENCE: f64 = 0.98;

const OFFSET_RANGE: std::ops::RangeInclusive<i32> = -10..=20;

const TURNSTILE_FAILURES: [&str; 6] = [
    "Motor de giro",
    "Sensor de paso",
    "Brazo mecánico",
    "Lector BIP",
    "Placa controladora",
    "Sistema de bloqueo",
];

const TERMINAL_FAILURES: [&str; 6] = [
    "Lector de tarjetas",
    "Pantalla táctil",
    "Impresora de boletas",
    "Conexión de red",
    "Teclado PIN",
    "Sistema de pago NFC",
];

/// Produces a failure-probability estimate for one row
pub trait RiskEstimator: Send + Sync {
    fn estimate(&self, record: &EquipmentRecord) -> RiskEstimate;
}

/// How the base score is computed before the random offset is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseScore {
    /// `100 - uptime`
    Uptime,
    /// Anomaly flag, open failure and maintenance age
    Signals,
}

impl BaseScore {
    pub fn for_backend(backend: StoreBackend) -> Self {
        match backend {
            StoreBackend::Fixture => BaseScore::Uptime,
            StoreBackend::Supabase => BaseScore::Signals,
        }
    }

    fn score(&self, record: &EquipmentRecord) -> f64 {
        match self {
            BaseScore::Uptime => 100.0 - record.uptime.unwrap_or(100.0),
            BaseScore::Signals => {
                let mut score = 10.0;
                if record.anomaly.unwrap_or(false) {
                    score += 40.0;
                }
                if record.open_failure().is_some() {
                    score += 20.0;
                }
                let age = record.days_since_maintenance.unwrap_or(0).max(0) as f64;
                score + 25.0 * (age / 90.0).min(1.0)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HeuristicEstimator {
    base: BaseScore,
}

impl HeuristicEstimator {
    pub fn new(base: BaseScore) -> Self {
        Self { base }
    }

    /// Estimate with a caller-provided random source
    pub fn estimate_with<R: Rng + ?Sized>(
        &self,
        record: &EquipmentRecord,
        rng: &mut R,
    ) -> RiskEstimate {
        let offset = rng.gen_range(OFFSET_RANGE) as f64;
        let probability = self.base.score(record) + offset;
        let probability = round_to(probability.clamp(MIN_PROBABILITY, MAX_PROBABILITY), 1);

        let catalogue: &[&str] = match record.equipment_type {
            EquipmentType::Torniquete => &TURNSTILE_FAILURES,
            EquipmentType::Transbank => &TERMINAL_FAILURES,
        };
        let predicted_failure = catalogue.choose(rng).copied().unwrap_or_default();

        RiskEstimate {
            equipment_id: record.id,
            equipment_name: record.name.clone(),
            probability,
            risk_level: RiskLevel::from_probability(probability),
            predicted_failure: predicted_failure.to_string(),
            confidence: round_to(rng.gen_range(MIN_CONFIDENCE..=MAX_CONFIDENCE), 2),
            timestamp: Utc::now(),
        }
    }
}

impl RiskEstimator for HeuristicEstimator {
    fn estimate(&self, record: &EquipmentRecord) -> RiskEstimate {
        self.estimate_with(record, &mut rand::thread_rng())
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[derive(Clone)]
pub struct RiskService {
    store: Arc<dyn RecordStore>,
    estimator: Arc<dyn RiskEstimator>,
}

impl RiskService {
    pub fn new(store: Arc<dyn RecordStore>, estimator: Arc<dyn RiskEstimator>) -> Self {
        Self { store, estimator }
    }

    pub async fn predict(&self, id: i32) -> AppResult<RiskEstimate> {
        let record = self.store.get(id).await?.ok_or_else(|| not_found(id))?;
        let estimate = self.estimator.estimate(&record);
        tracing::debug!(
            "Predicted {:.1}% failure probability for equipment {}",
            estimate.probability,
            id
        );
        Ok(estimate)
    }
}
