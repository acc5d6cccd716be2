//! Component health snapshot

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::repository::RecordStore;

const ONLINE: &str = "online";
const OFFLINE: &str = "offline";

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// "healthy", or "degraded" when a component is offline
    pub status: String,
    /// Version of the service
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub services: ComponentHealth,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
    pub api: String,
    pub ml_model: String,
    pub database: String,
}

#[derive(Clone)]
pub struct HealthService {
    store: Arc<dyn RecordStore>,
}

impl HealthService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Probe the store. Connectivity failures degrade the snapshot, they never fail it.
    pub async fn snapshot(&self) -> HealthResponse {
        let database_online = match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Record store unreachable: {}", e);
                false
            }
        };

        HealthResponse {
            status: if database_online { "healthy" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            services: ComponentHealth {
                api: ONLINE.to_string(),
                ml_model: ONLINE.to_string(),
                database: if database_online { ONLINE } else { OFFLINE }.to_string(),
            },
        }
    }
}
