//! Business logic services

pub mod equipment;
pub mod health;
pub mod metrics;
pub mod risk;
pub mod status;

use std::sync::Arc;

use crate::repository::RecordStore;

use self::risk::{BaseScore, HeuristicEstimator, RiskEstimator};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub metrics: metrics::MetricsService,
    pub risk: risk::RiskService,
    pub health: health::HealthService,
}

impl Services {
    /// Create all services over the given store, with the estimator matching its backend
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        let estimator = HeuristicEstimator::new(BaseScore::for_backend(store.backend()));
        Self::with_estimator(store, Arc::new(estimator))
    }

    pub fn with_estimator(store: Arc<dyn RecordStore>, estimator: Arc<dyn RiskEstimator>) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(store.clone()),
            metrics: metrics::MetricsService::new(store.clone()),
            risk: risk::RiskService::new(store.clone(), estimator),
            health: health::HealthService::new(store),
        }
    }
}
