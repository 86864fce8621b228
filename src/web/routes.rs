// src/web/routes.rs

use actix_web::web;

use crate::api;
use crate::api::Endpoint;
use crate::web::handlers::{category_handlers, product_handlers};

// Simple health check handler. In a real deployment this might also probe
// storage connectivity.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

fn bind(endpoint: &Endpoint) -> (String, actix_web::Route) {
  (endpoint.actix_path(), web::method(endpoint.method.clone()))
}

/// Registers every endpoint of the API contract. Paths and methods come from
/// the contract itself, so the routing table cannot drift from what clients
/// build URLs against.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.route("/api/health", web::get().to(health_check_handler));

  let (path, route) = bind(&api::products::LIST);
  cfg.route(&path, route.to(product_handlers::list_products_handler));

  let (path, route) = bind(&api::products::GET);
  cfg.route(&path, route.to(product_handlers::get_product_handler));

  let (path, route) = bind(&api::products::CREATE);
  cfg.route(&path, route.to(product_handlers::create_product_handler));

  let (path, route) = bind(&api::categories::LIST);
  cfg.route(&path, route.to(category_handlers::list_categories_handler));
}
