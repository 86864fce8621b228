// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::InsertProduct;
use crate::state::AppState;
use crate::storage::ProductFilters;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query: web::Query<ProductFilters>,
) -> Result<HttpResponse, AppError> {
  let products = app_state.storage.list_products(query.into_inner()).await?;
  info!("Fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match app_state.storage.get_product(product_id).await? {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound("Product not found".to_string()))
    }
  }
}

#[instrument(name = "handler::create_product", skip(app_state, body))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
  // Raw JSON in, so validation owns the whole 400 story and can name the
  // first violated field.
  let input = InsertProduct::parse(body.into_inner())?;
  let product = app_state.storage.create_product(input).await?;
  info!("Created product {} ({}).", product.id, product.name);
  Ok(HttpResponse::Created().json(product))
}
