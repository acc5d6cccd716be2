//! ConectaSonda failure-prediction backend
//!
//! REST JSON API exposing the status of turnstiles and Transbank payment
//! terminals to the monitoring dashboard, backed either by a seeded
//! in-memory fixture or by a Supabase table.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
