// src/storage/memory.rs

use async_trait::async_trait;
use parking_lot::RwLock;
use sqlx::types::Json;
use std::collections::BTreeMap;

use crate::errors::{AppError, Result};
use crate::models::{Category, InsertCategory, InsertProduct, Product};
use crate::storage::{ProductFilters, Storage};

/// Document-store-style backend: records keyed by id in process memory.
/// Stands in for the alternate document-store data path and backs dev mode
/// and tests. Ids are assigned sequentially per collection.
#[derive(Default)]
pub struct MemStorage {
  inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
  products: BTreeMap<i32, Product>,
  categories: BTreeMap<i32, Category>,
  next_product_id: i32,
  next_category_id: i32,
}

impl MemStorage {
  pub fn new() -> Self {
    Self::default()
  }
}

fn matches(product: &Product, filters: &ProductFilters) -> bool {
  if let Some(category) = filters.category() {
    if product.category != category {
      return false;
    }
  }
  if let Some(profession) = filters.profession() {
    if product.profession != profession {
      return false;
    }
  }
  if filters.featured_only() && !product.is_featured {
    return false;
  }
  if let Some(search) = filters.search() {
    let needle = search.to_lowercase();
    if !product.name.to_lowercase().contains(&needle)
      && !product.description.to_lowercase().contains(&needle)
    {
      return false;
    }
  }
  true
}

#[async_trait]
impl Storage for MemStorage {
  async fn list_products(&self, filters: ProductFilters) -> Result<Vec<Product>> {
    let inner = self.inner.read();
    Ok(
      inner
        .products
        .values()
        .filter(|p| matches(p, &filters))
        .cloned()
        .collect(),
    )
  }

  async fn get_product(&self, id: i32) -> Result<Option<Product>> {
    Ok(self.inner.read().products.get(&id).cloned())
  }

  async fn create_product(&self, data: InsertProduct) -> Result<Product> {
    let mut inner = self.inner.write();
    inner.next_product_id += 1;
    let product = Product {
      id: inner.next_product_id,
      name: data.name,
      description: data.description,
      price: data.price,
      image_url: data.image_url,
      category: data.category,
      profession: data.profession,
      stock: data.stock,
      is_featured: data.is_featured,
      specifications: Json(data.specifications),
    };
    inner.products.insert(product.id, product.clone());
    Ok(product)
  }

  async fn list_categories(&self) -> Result<Vec<Category>> {
    Ok(self.inner.read().categories.values().cloned().collect())
  }

  async fn create_category(&self, data: InsertCategory) -> Result<Category> {
    let mut inner = self.inner.write();
    if inner.categories.values().any(|c| c.slug == data.slug) {
      return Err(AppError::Conflict(format!(
        "Category slug '{}' already exists",
        data.slug
      )));
    }
    inner.next_category_id += 1;
    let category = Category {
      id: inner.next_category_id,
      name: data.name,
      slug: data.slug,
      image_url: data.image_url,
    };
    inner.categories.insert(category.id, category.clone());
    Ok(category)
  }
}
