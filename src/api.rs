// src/api.rs

//! Static description of the HTTP surface, shared by the server-side route
//! registration and by clients building request URLs (integration tests bind
//! to it the same way the storefront client does). A shape change here is the
//! only way either side can change, so they cannot silently diverge.
//!
//! Path templates use `:name` placeholders. The server converts them to the
//! actix `{name}` form at registration time; clients substitute them by name
//! with [`build_url`].

use actix_web::http::Method;
use serde::{Deserialize, Serialize};

pub struct Endpoint {
  pub method: Method,
  pub path: &'static str,
}

impl Endpoint {
  /// The path template in actix-web route syntax (`:id` becomes `{id}`).
  pub fn actix_path(&self) -> String {
    self
      .path
      .split('/')
      .map(|segment| match segment.strip_prefix(':') {
        Some(name) => format!("{{{name}}}"),
        None => segment.to_string(),
      })
      .collect::<Vec<_>>()
      .join("/")
  }
}

pub mod products {
  use super::Endpoint;
  use actix_web::http::Method;

  pub const LIST: Endpoint = Endpoint {
    method: Method::GET,
    path: "/api/products",
  };
  pub const GET: Endpoint = Endpoint {
    method: Method::GET,
    path: "/api/products/:id",
  };
  pub const CREATE: Endpoint = Endpoint {
    method: Method::POST,
    path: "/api/products",
  };
}

pub mod categories {
  use super::Endpoint;
  use actix_web::http::Method;

  pub const LIST: Endpoint = Endpoint {
    method: Method::GET,
    path: "/api/categories",
  };
}

/// Substitutes `:name` placeholders when constructing a concrete request URL.
/// Placeholders with no matching entry in `params` are left as-is.
pub fn build_url(path: &str, params: &[(&str, &str)]) -> String {
  let mut url = path.to_string();
  for (key, value) in params {
    url = url.replace(&format!(":{key}"), value);
  }
  url
}

/// Body of 404/409/500 responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
  pub message: String,
}

/// Body of 400 responses. `field` names the first violated field when the
/// failure is attributable to one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorBody {
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_build_url_substitutes_named_placeholder() {
    let url = build_url(products::GET.path, &[("id", "42")]);
    assert_eq!(url, "/api/products/42");
  }

  #[test]
  fn test_build_url_leaves_unknown_placeholders() {
    let url = build_url("/api/products/:id", &[("other", "1")]);
    assert_eq!(url, "/api/products/:id");
  }

  #[test]
  fn test_actix_path_conversion() {
    assert_eq!(products::GET.actix_path(), "/api/products/{id}");
    assert_eq!(products::LIST.actix_path(), "/api/products");
  }

  #[test]
  fn test_validation_body_omits_absent_field() {
    let body = ValidationErrorBody {
      message: "bad payload".to_string(),
      field: None,
    };
    let json = serde_json::to_value(&body).unwrap();
    assert!(json.get("field").is_none());
  }
}
