// src/seed.rs

//! Demo catalog loaded on startup when `SEED_DB` is set and the store holds
//! no products yet. Goes through the ordinary storage operations, so it works
//! against either backend.

use std::collections::HashMap;

use crate::errors::Result;
use crate::models::{InsertCategory, InsertProduct};
use crate::storage::{ProductFilters, Storage};

pub async fn seed_database(storage: &dyn Storage) -> Result<()> {
  let existing = storage.list_products(ProductFilters::default()).await?;
  if !existing.is_empty() {
    tracing::info!("Store already has {} products, skipping seed.", existing.len());
    return Ok(());
  }

  tracing::info!("Seeding database...");

  for category in seed_categories() {
    storage.create_category(category).await?;
  }
  for product in seed_products() {
    storage.create_product(product).await?;
  }

  tracing::info!("Database seeded successfully.");
  Ok(())
}

fn category(name: &str, slug: &str, image_url: &str) -> InsertCategory {
  InsertCategory {
    name: name.to_string(),
    slug: slug.to_string(),
    image_url: Some(image_url.to_string()),
  }
}

fn seed_categories() -> Vec<InsertCategory> {
  vec![
    category(
      "Outils",
      "outils",
      "https://images.unsplash.com/photo-1530124566582-a618bc2615dc?auto=format&fit=crop&q=80",
    ),
    category(
      "Sécurité",
      "securite",
      "https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?auto=format&fit=crop&q=80",
    ),
    category(
      "Peinture",
      "peinture",
      "https://images.unsplash.com/photo-1562259949-e8e7689d7828?auto=format&fit=crop&q=80",
    ),
    category(
      "Électricité",
      "electricite",
      "https://images.unsplash.com/photo-1558346490-a72e53ae2d4f?auto=format&fit=crop&q=80",
    ),
  ]
}

fn seed_products() -> Vec<InsertProduct> {
  vec![
    InsertProduct {
      name: "Perceuse à Percussion Pro".to_string(),
      description:
        "Perceuse sans fil haute performance avec batterie lithium-ion 18V. Idéale pour le béton et le métal."
          .to_string(),
      price: 12500, // 125.00
      category: "outils".to_string(),
      image_url: "https://images.unsplash.com/photo-1504148455328-c376907d081c?auto=format&fit=crop&q=80"
        .to_string(),
      is_featured: true,
      stock: 15,
      profession: "all".to_string(),
      specifications: HashMap::from([
        ("voltage".to_string(), "18V".to_string()),
        ("weight".to_string(), "1.5kg".to_string()),
      ]),
    },
    InsertProduct {
      name: "Jeu de Tournevis Premium".to_string(),
      description:
        "Set de 12 tournevis magnétiques en acier chrome-vanadium. Poignées ergonomiques antidérapantes."
          .to_string(),
      price: 3500, // 35.00
      category: "outils".to_string(),
      image_url: "https://images.unsplash.com/photo-1581147036324-c17ac41dfa6c?auto=format&fit=crop&q=80"
        .to_string(),
      is_featured: true,
      stock: 50,
      profession: "all".to_string(),
      specifications: HashMap::from([
        ("pieces".to_string(), "12".to_string()),
        ("material".to_string(), "Chrome-Vanadium".to_string()),
      ]),
    },
    InsertProduct {
      name: "Peinture Murale Blanche 5L".to_string(),
      description: "Peinture acrylique blanc mat, haute couvrance, séchage rapide. Parfaite pour intérieur."
        .to_string(),
      price: 4500, // 45.00
      category: "peinture".to_string(),
      image_url: "https://images.unsplash.com/photo-1589939705384-5185137a7f0f?auto=format&fit=crop&q=80"
        .to_string(),
      is_featured: false,
      stock: 30,
      profession: "all".to_string(),
      specifications: HashMap::from([
        ("volume".to_string(), "5L".to_string()),
        ("finish".to_string(), "Mat".to_string()),
      ]),
    },
    InsertProduct {
      name: "Cadenas Haute Sécurité".to_string(),
      description: "Cadenas en acier trempé avec protection anti-perçage. Fourni avec 3 clés.".to_string(),
      price: 2200, // 22.00
      category: "securite".to_string(),
      image_url: "https://images.unsplash.com/photo-1589820296156-2454b3a89305?auto=format&fit=crop&q=80"
        .to_string(),
      is_featured: true,
      stock: 100,
      profession: "all".to_string(),
      specifications: HashMap::from([
        ("material".to_string(), "Hardened Steel".to_string()),
        ("securityLevel".to_string(), "9/10".to_string()),
      ]),
    },
  ]
}
