// src/state.rs

use crate::config::AppConfig;
use crate::storage::Storage;
use std::sync::Arc;

/// Shared application state, constructed once at startup and cloned into each
/// worker. The storage backend is injected here rather than reached through a
/// global, so its lifecycle is tied to the process.
#[derive(Clone)]
pub struct AppState {
  pub storage: Arc<dyn Storage>,
  pub config: Arc<AppConfig>,
}
