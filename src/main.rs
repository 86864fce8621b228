// src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use quincaillerie_api::config::AppConfig;
use quincaillerie_api::state::AppState;
use quincaillerie_api::web::configure_app_routes;
use quincaillerie_api::{seed, storage};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting storefront catalog server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  let storage = match storage::build_storage(&app_config).await {
    Ok(storage) => storage,
    Err(e) => {
      tracing::error!(error = %e, "Failed to initialize storage backend.");
      panic!("Storage initialization error: {}", e);
    }
  };

  if app_config.seed_db {
    if let Err(e) = seed::seed_database(storage.as_ref()).await {
      tracing::error!(error = %e, "Failed to seed database.");
    }
  }

  let app_state = AppState {
    storage,
    config: app_config.clone(),
  };

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
