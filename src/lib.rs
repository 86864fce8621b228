// src/lib.rs

//! Storefront catalog API for Quincaillerie Bilel.
//!
//! A thin HTTP layer over a pluggable storage seam:
//!  - `models`: entity shapes and insertion validation (single source of
//!    truth for field constraints).
//!  - `storage`: the `Storage` trait with a relational (postgres) and a
//!    document-store-style (in-memory) backend, selected at startup.
//!  - `api`: the endpoint contract both router and clients bind to.
//!  - `web`: actix-web routes and handlers.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod seed;
pub mod state;
pub mod storage;
pub mod web;

pub use errors::{AppError, Result};
pub use state::AppState;
