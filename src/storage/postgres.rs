// src/storage/postgres.rs

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use sqlx::types::Json;
use sqlx::{Postgres, QueryBuilder};

use crate::errors::{AppError, Result};
use crate::models::{Category, InsertCategory, InsertProduct, Product};
use crate::storage::{ProductFilters, Storage};

const PRODUCT_COLUMNS: &str =
  "id, name, description, price, image_url, category, profession, stock, is_featured, specifications";
const CATEGORY_COLUMNS: &str = "id, name, slug, image_url";

/// Canonical relational backend, one round-trip query per call, no
/// client-side transactions or batching.
pub struct PgStorage {
  pool: PgPool,
}

impl PgStorage {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  pub async fn connect(database_url: &str) -> Result<Self> {
    let pool = PgPool::connect(database_url).await?;
    Ok(Self::new(pool))
  }

  /// Creates the catalog tables when they do not exist yet. Category slugs
  /// carry the only hard uniqueness constraint; `products.category` is
  /// deliberately NOT a foreign key (orphans are tolerated application-wide).
  pub async fn ensure_schema(&self) -> Result<()> {
    sqlx::query(
      r#"
      CREATE TABLE IF NOT EXISTS products (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        price INTEGER NOT NULL,
        image_url TEXT NOT NULL,
        category TEXT NOT NULL,
        profession TEXT NOT NULL DEFAULT 'all',
        stock INTEGER NOT NULL DEFAULT 0,
        is_featured BOOLEAN NOT NULL DEFAULT FALSE,
        specifications JSONB NOT NULL DEFAULT '{}'::jsonb
      )
      "#,
    )
    .execute(&self.pool)
    .await?;

    sqlx::query(
      r#"
      CREATE TABLE IF NOT EXISTS categories (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        image_url TEXT
      )
      "#,
    )
    .execute(&self.pool)
    .await?;

    Ok(())
  }
}

fn push_clause(qb: &mut QueryBuilder<'_, Postgres>, first: &mut bool) {
  if *first {
    qb.push(" WHERE ");
    *first = false;
  } else {
    qb.push(" AND ");
  }
}

#[async_trait]
impl Storage for PgStorage {
  async fn list_products(&self, filters: ProductFilters) -> Result<Vec<Product>> {
    let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT {PRODUCT_COLUMNS} FROM products"));
    let mut first = true;

    if let Some(category) = filters.category() {
      push_clause(&mut qb, &mut first);
      qb.push("category = ").push_bind(category.to_string());
    }
    if let Some(profession) = filters.profession() {
      push_clause(&mut qb, &mut first);
      qb.push("profession = ").push_bind(profession.to_string());
    }
    if filters.featured_only() {
      push_clause(&mut qb, &mut first);
      qb.push("is_featured = TRUE");
    }
    if let Some(search) = filters.search() {
      push_clause(&mut qb, &mut first);
      let pattern = format!("%{search}%");
      qb.push("(name ILIKE ")
        .push_bind(pattern.clone())
        .push(" OR description ILIKE ")
        .push_bind(pattern)
        .push(")");
    }

    let products = qb.build_query_as::<Product>().fetch_all(&self.pool).await?;
    Ok(products)
  }

  async fn get_product(&self, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(&format!(
      "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;
    Ok(product)
  }

  async fn create_product(&self, data: InsertProduct) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(&format!(
      r#"
      INSERT INTO products
        (name, description, price, image_url, category, profession, stock, is_featured, specifications)
      VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
      RETURNING {PRODUCT_COLUMNS}
      "#
    ))
    .bind(data.name)
    .bind(data.description)
    .bind(data.price)
    .bind(data.image_url)
    .bind(data.category)
    .bind(data.profession)
    .bind(data.stock)
    .bind(data.is_featured)
    .bind(Json(data.specifications))
    .fetch_one(&self.pool)
    .await?;
    Ok(product)
  }

  async fn list_categories(&self) -> Result<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(&format!("SELECT {CATEGORY_COLUMNS} FROM categories"))
      .fetch_all(&self.pool)
      .await?;
    Ok(categories)
  }

  async fn create_category(&self, data: InsertCategory) -> Result<Category> {
    let category = sqlx::query_as::<_, Category>(&format!(
      "INSERT INTO categories (name, slug, image_url) VALUES ($1, $2, $3) RETURNING {CATEGORY_COLUMNS}"
    ))
    .bind(data.name)
    .bind(data.slug.clone())
    .bind(data.image_url)
    .fetch_one(&self.pool)
    .await
    .map_err(|e| match e.as_database_error() {
      Some(db_err) if db_err.is_unique_violation() => {
        AppError::Conflict(format!("Category slug '{}' already exists", data.slug))
      }
      _ => AppError::Sqlx(e),
    })?;
    Ok(category)
  }
}
