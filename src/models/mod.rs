// src/models/mod.rs

//! Data structures for the catalog entities and their insertion validation.
//!
//! The `parse` constructors on the insert shapes are the single source of
//! truth for field constraints: the router feeds raw JSON through them and
//! relays the first violated field, so no constraint lives in two places.

pub mod category;
pub mod product;

pub use category::{Category, InsertCategory};
pub use product::{InsertProduct, Product, Specifications};

use serde_json::Value;

use crate::errors::AppError;

pub(crate) fn require_object(value: &Value) -> Result<(), AppError> {
  if value.is_object() {
    Ok(())
  } else {
    Err(AppError::Validation {
      message: "Expected a JSON object".to_string(),
      field: None,
    })
  }
}

pub(crate) fn require_string(value: &Value, field: &str) -> Result<(), AppError> {
  match value.get(field) {
    None | Some(Value::Null) => Err(AppError::validation(field, format!("{field} is required"))),
    Some(Value::String(s)) if s.trim().is_empty() => {
      Err(AppError::validation(field, format!("{field} must not be empty")))
    }
    Some(Value::String(_)) => Ok(()),
    Some(_) => Err(AppError::validation(field, format!("{field} must be a string"))),
  }
}

pub(crate) fn optional_string(value: &Value, field: &str) -> Result<(), AppError> {
  match value.get(field) {
    None | Some(Value::Null) | Some(Value::String(_)) => Ok(()),
    Some(_) => Err(AppError::validation(field, format!("{field} must be a string"))),
  }
}

pub(crate) fn require_non_negative_int(value: &Value, field: &str) -> Result<(), AppError> {
  match value.get(field) {
    None | Some(Value::Null) => Err(AppError::validation(field, format!("{field} is required"))),
    Some(v) => check_non_negative_int(v, field),
  }
}

pub(crate) fn optional_non_negative_int(value: &Value, field: &str) -> Result<(), AppError> {
  match value.get(field) {
    None | Some(Value::Null) => Ok(()),
    Some(v) => check_non_negative_int(v, field),
  }
}

fn check_non_negative_int(v: &Value, field: &str) -> Result<(), AppError> {
  let n = v
    .as_i64()
    .ok_or_else(|| AppError::validation(field, format!("{field} must be an integer")))?;
  if n < 0 {
    return Err(AppError::validation(field, format!("{field} must not be negative")));
  }
  if i32::try_from(n).is_err() {
    return Err(AppError::validation(field, format!("{field} is out of range")));
  }
  Ok(())
}

pub(crate) fn optional_bool(value: &Value, field: &str) -> Result<(), AppError> {
  match value.get(field) {
    None | Some(Value::Null) | Some(Value::Bool(_)) => Ok(()),
    Some(_) => Err(AppError::validation(field, format!("{field} must be a boolean"))),
  }
}

pub(crate) fn optional_string_map(value: &Value, field: &str) -> Result<(), AppError> {
  match value.get(field) {
    None | Some(Value::Null) => Ok(()),
    Some(Value::Object(map)) => {
      if map.values().all(Value::is_string) {
        Ok(())
      } else {
        Err(AppError::validation(
          field,
          format!("{field} values must all be strings"),
        ))
      }
    }
    Some(_) => Err(AppError::validation(field, format!("{field} must be an object"))),
  }
}
