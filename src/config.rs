// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

/// Which `Storage` implementation to construct at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
  Postgres,
  Memory,
}

impl FromStr for StorageBackend {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_ascii_lowercase().as_str() {
      "postgres" => Ok(StorageBackend::Postgres),
      "memory" => Ok(StorageBackend::Memory),
      other => Err(AppError::Config(format!(
        "Invalid STORAGE_BACKEND '{other}': expected 'postgres' or 'memory'"
      ))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub storage_backend: StorageBackend,
  /// Required when `storage_backend` is postgres, ignored otherwise.
  pub database_url: Option<String>,
  /// Load the demo catalog on startup when the store has no products.
  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name)
        .map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let storage_backend = get_env("STORAGE_BACKEND")
      .unwrap_or_else(|_| "postgres".to_string())
      .parse::<StorageBackend>()?;

    let database_url = match storage_backend {
      StorageBackend::Postgres => Some(get_env("DATABASE_URL")?),
      StorageBackend::Memory => env::var("DATABASE_URL").ok(),
    };

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      storage_backend,
      database_url,
      seed_db,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_storage_backend_parses_known_values() {
    assert_eq!("postgres".parse::<StorageBackend>().unwrap(), StorageBackend::Postgres);
    assert_eq!("Memory".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
  }

  #[test]
  fn test_storage_backend_rejects_unknown_value() {
    assert!("firestore".parse::<StorageBackend>().is_err());
  }
}
