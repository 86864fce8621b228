// tests/product_api_tests.rs
mod common; // Reference the common module

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::json;

use quincaillerie_api::api::{self, ErrorBody, ValidationErrorBody};
use quincaillerie_api::models::Product;
use quincaillerie_api::state::AppState;
use quincaillerie_api::storage::Storage;
use quincaillerie_api::web::configure_app_routes;

macro_rules! spawn_app {
  ($state:expr) => {
    test::init_service(
      App::new()
        .app_data(web::Data::new($state.clone()))
        .configure(configure_app_routes),
    )
    .await
  };
}

async fn seeded_state() -> AppState {
  common::setup_tracing();
  let state = common::mem_state();
  common::seed_catalog(state.storage.as_ref()).await;
  state
}

async fn list_products(
  app: &impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
  >,
  query: &str,
) -> Vec<Product> {
  let uri = if query.is_empty() {
    api::products::LIST.path.to_string()
  } else {
    format!("{}?{}", api::products::LIST.path, query)
  };
  let req = test::TestRequest::get().uri(&uri).to_request();
  let resp = test::call_service(app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  test::read_body_json(resp).await
}

#[actix_web::test]
async fn test_list_without_filters_returns_all_products() {
  let state = seeded_state().await;
  let app = spawn_app!(state);

  let products = list_products(&app, "").await;
  assert_eq!(products.len(), 4);
}

#[actix_web::test]
async fn test_filters_combine_with_and() {
  let state = seeded_state().await;
  let app = spawn_app!(state);

  let outils = list_products(&app, "category=outils").await;
  assert_eq!(outils.len(), 3);

  let featured_outils = list_products(&app, "category=outils&featured=true").await;
  assert_eq!(featured_outils.len(), 2);
  assert!(featured_outils.iter().all(|p| p.category == "outils" && p.is_featured));
}

#[actix_web::test]
async fn test_featured_false_imposes_no_restriction() {
  let state = seeded_state().await;
  let app = spawn_app!(state);

  let products = list_products(&app, "featured=false").await;
  assert_eq!(products.len(), 4);
}

#[actix_web::test]
async fn test_empty_filter_value_is_ignored() {
  let state = seeded_state().await;
  let app = spawn_app!(state);

  let products = list_products(&app, "category=").await;
  assert_eq!(products.len(), 4);
}

#[actix_web::test]
async fn test_profession_filter_exact_match() {
  let state = seeded_state().await;
  let mut plumbing = common::insert_product("Clé à Molette", "Clé à molette 250mm.", "outils", false);
  plumbing.profession = "plombier".to_string();
  state.storage.create_product(plumbing).await.unwrap();
  let app = spawn_app!(state);

  let products = list_products(&app, "profession=plombier").await;
  assert_eq!(products.len(), 1);
  assert_eq!(products[0].name, "Clé à Molette");

  // AND-combined with category: no plombier product in peinture.
  let products = list_products(&app, "profession=plombier&category=peinture").await;
  assert!(products.is_empty());
}

#[actix_web::test]
async fn test_search_is_case_insensitive_over_name_and_description() {
  let state = seeded_state().await;
  let app = spawn_app!(state);

  let products = list_products(&app, "search=perceuse").await;
  assert_eq!(products.len(), 1);
  assert_eq!(products[0].name, "Perceuse à Percussion Pro");

  // Matches on description as well.
  let products = list_products(&app, "search=acrylique").await;
  assert_eq!(products.len(), 1);
  assert_eq!(products[0].name, "Peinture Murale Blanche 5L");
}

#[actix_web::test]
async fn test_search_with_no_match_returns_empty_array() {
  let state = seeded_state().await;
  let app = spawn_app!(state);

  let products = list_products(&app, "search=tondeuse").await;
  assert!(products.is_empty());
}

#[actix_web::test]
async fn test_get_product_returns_record() {
  let state = seeded_state().await;
  let app = spawn_app!(state);

  let all = list_products(&app, "").await;
  let target = &all[0];

  let url = api::build_url(api::products::GET.path, &[("id", &target.id.to_string())]);
  let req = test::TestRequest::get().uri(&url).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let product: Product = test::read_body_json(resp).await;
  assert_eq!(product.id, target.id);
  assert_eq!(product.name, target.name);
}

#[actix_web::test]
async fn test_get_unknown_product_returns_404() {
  let state = seeded_state().await;
  let app = spawn_app!(state);

  let url = api::build_url(api::products::GET.path, &[("id", "9999")]);
  let req = test::TestRequest::get().uri(&url).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  let body: ErrorBody = test::read_body_json(resp).await;
  assert_eq!(body.message, "Product not found");
}

#[actix_web::test]
async fn test_create_product_round_trip() {
  let state = seeded_state().await;
  let app = spawn_app!(state);

  let payload = json!({
    "name": "Scie Sauteuse",
    "description": "Scie sauteuse 650W avec guidage laser.",
    "price": 8900,
    "imageUrl": "https://example.com/scie.jpg",
    "category": "outils",
    "stock": 12,
    "isFeatured": true,
    "specifications": {"power": "650W"}
  });
  let req = test::TestRequest::post()
    .uri(api::products::CREATE.path)
    .set_json(&payload)
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::CREATED);

  let created: Product = test::read_body_json(resp).await;
  assert_eq!(created.name, "Scie Sauteuse");
  assert_eq!(created.price, 8900);
  assert_eq!(created.profession, "all");
  assert_eq!(created.specifications.0.get("power").map(String::as_str), Some("650W"));

  // Immediately retrievable with identical field values.
  let url = api::build_url(api::products::GET.path, &[("id", &created.id.to_string())]);
  let req = test::TestRequest::get().uri(&url).to_request();
  let fetched: Product = test::read_body_json(test::call_service(&app, req).await).await;
  assert_eq!(fetched.name, created.name);
  assert_eq!(fetched.description, created.description);
  assert_eq!(fetched.stock, 12);
  assert!(fetched.is_featured);
}

#[actix_web::test]
async fn test_created_ids_are_distinct() {
  let state = common::mem_state();
  let app = spawn_app!(state);

  let mut ids = Vec::new();
  for i in 0..3 {
    let payload = json!({
      "name": format!("Produit {i}"),
      "description": "Description produit.",
      "price": 100,
      "imageUrl": "https://example.com/p.jpg",
      "category": "outils"
    });
    let req = test::TestRequest::post()
      .uri(api::products::CREATE.path)
      .set_json(&payload)
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Product = test::read_body_json(resp).await;
    ids.push(created.id);
  }

  ids.sort_unstable();
  ids.dedup();
  assert_eq!(ids.len(), 3);
}

#[actix_web::test]
async fn test_create_product_missing_name_is_400_naming_name() {
  let state = common::mem_state();
  let app = spawn_app!(state);

  let payload = json!({
    "description": "Sans nom.",
    "price": 100,
    "imageUrl": "https://example.com/p.jpg",
    "category": "outils"
  });
  let req = test::TestRequest::post()
    .uri(api::products::CREATE.path)
    .set_json(&payload)
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let body: ValidationErrorBody = test::read_body_json(resp).await;
  assert_eq!(body.field.as_deref(), Some("name"));
}

#[actix_web::test]
async fn test_create_product_negative_price_is_400_naming_price() {
  let state = common::mem_state();
  let app = spawn_app!(state);

  let payload = json!({
    "name": "Produit",
    "description": "Prix négatif.",
    "price": -5,
    "imageUrl": "https://example.com/p.jpg",
    "category": "outils"
  });
  let req = test::TestRequest::post()
    .uri(api::products::CREATE.path)
    .set_json(&payload)
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let body: ValidationErrorBody = test::read_body_json(resp).await;
  assert_eq!(body.field.as_deref(), Some("price"));
}

#[actix_web::test]
async fn test_create_product_non_object_body_is_400_without_field() {
  let state = common::mem_state();
  let app = spawn_app!(state);

  let req = test::TestRequest::post()
    .uri(api::products::CREATE.path)
    .set_json(&json!(["not", "an", "object"]))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let body: ValidationErrorBody = test::read_body_json(resp).await;
  assert!(body.field.is_none());
}
