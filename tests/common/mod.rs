// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::collections::HashMap;
use std::sync::Arc;

use quincaillerie_api::config::{AppConfig, StorageBackend};
use quincaillerie_api::models::{InsertCategory, InsertProduct};
use quincaillerie_api::state::AppState;
use quincaillerie_api::storage::{MemStorage, Storage};

pub fn setup_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

pub fn test_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    storage_backend: StorageBackend::Memory,
    database_url: None,
    seed_db: false,
  }
}

/// Fresh application state over an empty in-memory backend.
pub fn mem_state() -> AppState {
  AppState {
    storage: Arc::new(MemStorage::new()),
    config: Arc::new(test_config()),
  }
}

pub fn insert_product(name: &str, description: &str, category: &str, featured: bool) -> InsertProduct {
  InsertProduct {
    name: name.to_string(),
    description: description.to_string(),
    price: 1000,
    image_url: format!("https://example.com/{}.jpg", category),
    category: category.to_string(),
    profession: "all".to_string(),
    stock: 5,
    is_featured: featured,
    specifications: HashMap::new(),
  }
}

pub fn insert_category(name: &str, slug: &str) -> InsertCategory {
  InsertCategory {
    name: name.to_string(),
    slug: slug.to_string(),
    image_url: None,
  }
}

/// Catalog fixture: 4 products, 3 in `outils`, 2 of those featured.
pub async fn seed_catalog(storage: &dyn Storage) {
  storage
    .create_category(insert_category("Outils", "outils"))
    .await
    .unwrap();
  storage
    .create_category(insert_category("Peinture", "peinture"))
    .await
    .unwrap();

  storage
    .create_product(insert_product(
      "Perceuse à Percussion Pro",
      "Perceuse sans fil haute performance 18V.",
      "outils",
      true,
    ))
    .await
    .unwrap();
  storage
    .create_product(insert_product(
      "Jeu de Tournevis Premium",
      "Set de 12 tournevis magnétiques.",
      "outils",
      true,
    ))
    .await
    .unwrap();
  storage
    .create_product(insert_product(
      "Marteau de Charpentier",
      "Marteau 500g manche fibre de verre.",
      "outils",
      false,
    ))
    .await
    .unwrap();
  storage
    .create_product(insert_product(
      "Peinture Murale Blanche 5L",
      "Peinture acrylique blanc mat.",
      "peinture",
      false,
    ))
    .await
    .unwrap();
}
