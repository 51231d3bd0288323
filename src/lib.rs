pub mod config;
pub mod dashboard;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;

use errors::AppError;
use services::upstream::UpstreamClient;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: config::AppConfig) -> Result<Self, AppError> {
        let upstream = UpstreamClient::new(&config)?;
        Ok(Self { config, upstream })
    }
}
