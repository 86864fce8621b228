// src/models/category.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::errors::AppError;
use crate::models;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
  pub id: i32,
  pub name: String,
  /// URL-safe unique identifier, used in place of the numeric id in filters
  /// and links.
  pub slug: String,
  pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertCategory {
  pub name: String,
  pub slug: String,
  #[serde(default)]
  pub image_url: Option<String>,
}

impl InsertCategory {
  /// Validates a raw JSON payload and deserializes it, reporting the first
  /// violated field.
  pub fn parse(mut value: Value) -> Result<Self, AppError> {
    models::require_object(&value)?;
    models::require_string(&value, "name")?;
    models::require_string(&value, "slug")?;
    models::optional_string(&value, "imageUrl")?;

    if let Value::Object(map) = &mut value {
      map.retain(|_, v| !v.is_null());
    }

    serde_json::from_value(value).map_err(|e| AppError::Validation {
      message: e.to_string(),
      field: None,
    })
  }
}
