//! Supabase record store (PostgREST over HTTPS)

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client,
};

use super::{not_found, RecordStore};
use crate::{
    config::StoreBackend,
    error::{AppError, AppResult},
    models::{EquipmentRecord, EquipmentStatus, FailureEvent},
};

/// Read-only view of the equipment table. Rows are fetched fresh on every call.
#[derive(Clone)]
pub struct SupabaseStore {
    client: Client,
    endpoint: String,
}

impl SupabaseStore {
    pub fn new(url: &str, key: &str, table: &str) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(key)
            .map_err(|e| AppError::Internal(format!("Invalid Supabase key: {}", e)))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", key))
            .map_err(|e| AppError::Internal(format!("Invalid Supabase key: {}", e)))?;
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: table_endpoint(url, table),
        })
    }

    async fn select(&self, query: &[(&str, String)]) -> AppResult<Vec<EquipmentRecord>> {
        let rows = self
            .client
            .get(&self.endpoint)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<EquipmentRecord>>()
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl RecordStore for SupabaseStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::Supabase
    }

    async fn list(&self) -> AppResult<Vec<EquipmentRecord>> {
        self.select(&[("select", "*".to_string()), ("order", "id.asc".to_string())])
            .await
    }

    async fn get(&self, id: i32) -> AppResult<Option<EquipmentRecord>> {
        let rows = self
            .select(&[("select", "*".to_string()), ("id", format!("eq.{}", id))])
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn failures(&self) -> AppResult<Vec<FailureEvent>> {
        let rows = self.list().await?;
        Ok(failure_events(&rows))
    }

    async fn set_status(&self, id: i32, status: EquipmentStatus) -> AppResult<bool> {
        if self.get(id).await?.is_none() {
            return Err(not_found(id));
        }
        // The table is read-only from this service
        tracing::warn!(
            "Status update to {} for equipment {} acknowledged but not persisted",
            status,
            id
        );
        Ok(false)
    }

    async fn ping(&self) -> AppResult<()> {
        self.client
            .get(&self.endpoint)
            .query(&[("select", "id"), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

fn table_endpoint(url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", url.trim_end_matches('/'), table)
}

/// Open failures, one per row carrying a failure indicator
fn failure_events(rows: &[EquipmentRecord]) -> Vec<FailureEvent> {
    let mut events: Vec<FailureEvent> = rows
        .iter()
        .filter_map(|row| {
            row.open_failure().map(|failure| FailureEvent {
                id: row.id,
                date: row.last_failure.clone().unwrap_or_else(|| "N/A".to_string()),
                equipment: row.name.clone(),
                failure_type: Some(failure.to_string()),
                resolved: false,
            })
        })
        .collect();
    // Most recent first, ISO dates order lexically
    events.sort_by(|a, b| b.date.cmp(&a.date));
    events
}
