// src/storage/mod.rs

//! Storage seam for the catalog. One trait, two interchangeable backends
//! selected at startup: the canonical relational path ([`PgStorage`]) and an
//! in-process document-store-style path ([`MemStorage`]) used for dev mode and
//! tests. Handlers only ever see `Arc<dyn Storage>`, injected through
//! application state at startup.

pub mod memory;
pub mod postgres;

pub use memory::MemStorage;
pub use postgres::PgStorage;

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::config::{AppConfig, StorageBackend};
use crate::errors::{AppError, Result};
use crate::models::{Category, InsertCategory, InsertProduct, Product};

/// Query filters for product listings. Doubles as the deserialization target
/// for the `GET /api/products` query string, so the HTTP surface and the
/// storage layer agree on the filter vocabulary.
///
/// All supplied filters combine with logical AND. Empty strings are treated as
/// absent. `featured` is asymmetric on purpose: only `Some(true)` restricts;
/// `Some(false)` and `None` impose no restriction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilters {
  pub category: Option<String>,
  pub profession: Option<String>,
  pub featured: Option<bool>,
  /// Substring matched case-insensitively against name OR description.
  pub search: Option<String>,
}

impl ProductFilters {
  pub(crate) fn category(&self) -> Option<&str> {
    non_empty(self.category.as_deref())
  }

  pub(crate) fn profession(&self) -> Option<&str> {
    non_empty(self.profession.as_deref())
  }

  pub(crate) fn featured_only(&self) -> bool {
    self.featured == Some(true)
  }

  pub(crate) fn search(&self) -> Option<&str> {
    non_empty(self.search.as_deref())
  }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
  value.filter(|s| !s.is_empty())
}

#[async_trait]
pub trait Storage: Send + Sync {
  /// Full matching set, arbitrary order, no pagination. Zero matches is a
  /// valid empty result, not an error.
  async fn list_products(&self, filters: ProductFilters) -> Result<Vec<Product>>;

  /// Explicit absence for a missing id, never an error.
  async fn get_product(&self, id: i32) -> Result<Option<Product>>;

  /// Inserts pre-validated data and returns the stored record including its
  /// assigned id.
  async fn create_product(&self, data: InsertProduct) -> Result<Product>;

  async fn list_categories(&self) -> Result<Vec<Category>>;

  /// Fails with a conflict on a duplicate slug.
  async fn create_category(&self, data: InsertCategory) -> Result<Category>;
}

/// Constructs the backend selected by configuration.
pub async fn build_storage(config: &AppConfig) -> Result<Arc<dyn Storage>> {
  match config.storage_backend {
    StorageBackend::Memory => {
      tracing::info!("Using in-memory storage backend.");
      Ok(Arc::new(MemStorage::new()))
    }
    StorageBackend::Postgres => {
      let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| AppError::Config("DATABASE_URL is required for the postgres backend".to_string()))?;
      let storage = PgStorage::connect(url).await?;
      storage.ensure_schema().await?;
      tracing::info!("Using postgres storage backend.");
      Ok(Arc::new(storage))
    }
  }
}
