//! Record stores supplying raw equipment rows

pub mod fixture;
pub mod supabase;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::{StoreBackend, StoreConfig},
    error::{AppError, AppResult},
    models::{EquipmentRecord, EquipmentStatus, FailureEvent},
};

pub use fixture::FixtureStore;
pub use supabase::SupabaseStore;

/// Source of truth for equipment rows.
///
/// Implementations return raw rows; status derivation happens in the services.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Which backend this store talks to
    fn backend(&self) -> StoreBackend;

    /// All equipment rows, ordered by id
    async fn list(&self) -> AppResult<Vec<EquipmentRecord>>;

    /// One row, `None` when the id is unknown
    async fn get(&self, id: i32) -> AppResult<Option<EquipmentRecord>>;

    /// Failure history, most recent first
    async fn failures(&self) -> AppResult<Vec<FailureEvent>>;

    /// Apply a status change. Returns whether the change was persisted.
    async fn set_status(&self, id: i32, status: EquipmentStatus) -> AppResult<bool>;

    /// Connectivity probe used by the health check
    async fn ping(&self) -> AppResult<()>;
}

/// Build the store selected in configuration
pub fn connect(config: &StoreConfig) -> AppResult<Arc<dyn RecordStore>> {
    match config.backend {
        StoreBackend::Fixture => Ok(Arc::new(FixtureStore::seeded())),
        StoreBackend::Supabase => {
            let url = config.supabase_url.as_deref().ok_or_else(|| {
                AppError::Internal("Supabase URL is not configured".to_string())
            })?;
            let key = config.supabase_key.as_deref().ok_or_else(|| {
                AppError::Internal("Supabase key is not configured".to_string())
            })?;
            Ok(Arc::new(SupabaseStore::new(url, key, &config.table)?))
        }
    }
}

pub(crate) fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Equipo {} no encontrado", id))
}
