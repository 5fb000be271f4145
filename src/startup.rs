//! Server wiring: configuration, catalog, telemetry and the HTTP listener.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::adapters::http::{api_router, AppState};
use crate::config::{AppConfig, ConfigError, ValidationError};
use crate::domain::diet::{CatalogError, DietCatalog};
use crate::telemetry::{self, TelemetryError};

/// Errors that stop the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Diet catalog rejected: {0}")]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads the configured catalog, or the built-in one. Either way the result
/// has passed catalog validation.
pub fn load_catalog(config: &AppConfig) -> Result<DietCatalog, CatalogError> {
    match &config.catalog.path {
        Some(path) => DietCatalog::from_yaml_file(path),
        None => DietCatalog::builtin().clone().validated(),
    }
}

/// Loads configuration, initialises logging and serves until the listener stops.
pub async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;

    telemetry::init(&config.server)?;

    let catalog = load_catalog(&config)?;
    let source = match &config.catalog.path {
        Some(path) => path.display().to_string(),
        None => "builtin".to_string(),
    };
    info!(entries = catalog.len(), %source, "Diet catalog loaded");

    let state = AppState::new(Arc::new(catalog));
    let app = api_router(state, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(environment = ?config.server.environment, %addr, "health compass ready");

    axum::serve(listener, app).await?;
    Ok(())
}
