// src/models/product.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use std::collections::HashMap;

use crate::errors::AppError;
use crate::models;

/// Free-form attribute map (`voltage` -> `"18V"`). Unordered, may be empty.
pub type Specifications = HashMap<String, String>;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: i32,
  pub name: String,
  pub description: String,
  /// Smallest currency unit (cents).
  pub price: i32,
  pub image_url: String,
  /// Informal reference to `Category.slug`; not enforced, orphans are
  /// tolerated by consumers.
  pub category: String,
  pub profession: String,
  pub stock: i32,
  pub is_featured: bool,
  pub specifications: Json<Specifications>,
}

/// Insertion shape: `id` stripped, optional fields defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertProduct {
  pub name: String,
  pub description: String,
  pub price: i32,
  pub image_url: String,
  pub category: String,
  #[serde(default = "default_profession")]
  pub profession: String,
  #[serde(default)]
  pub stock: i32,
  #[serde(default)]
  pub is_featured: bool,
  #[serde(default)]
  pub specifications: Specifications,
}

fn default_profession() -> String {
  "all".to_string()
}

impl InsertProduct {
  /// Validates a raw JSON payload and deserializes it. Checks fields in
  /// declaration order and reports the first violation as
  /// `AppError::Validation` carrying the field name.
  pub fn parse(mut value: Value) -> Result<Self, AppError> {
    models::require_object(&value)?;
    models::require_string(&value, "name")?;
    models::require_string(&value, "description")?;
    models::require_non_negative_int(&value, "price")?;
    models::require_string(&value, "imageUrl")?;
    models::require_string(&value, "category")?;
    models::optional_string(&value, "profession")?;
    models::optional_non_negative_int(&value, "stock")?;
    models::optional_bool(&value, "isFeatured")?;
    models::optional_string_map(&value, "specifications")?;

    // Explicit nulls count as absent so serde defaults apply.
    if let Value::Object(map) = &mut value {
      map.retain(|_, v| !v.is_null());
    }

    serde_json::from_value(value).map_err(|e| AppError::Validation {
      message: e.to_string(),
      field: None,
    })
  }
}
