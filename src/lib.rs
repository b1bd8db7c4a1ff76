//! # Product Catalog
//!
//! A small REST service that keeps a product catalog in memory. Products live in a single
//! store actor from the [`actor_framework`] crate; everything above it is plain, stateless
//! request handling.
//!
//! ## 🗺️ Module Tour
//!
//! Listed leaves first, in the order a request travels back out:
//!
//! - [`model`] - [`Product`](model::Product), [`ProductCreate`](model::ProductCreate) and the
//!   [`CreateProductRequest`](model::CreateProductRequest) wire DTO.
//! - [`product_actor`] - The catalog store: `ActorEntity` for `Product`, UUID id generation,
//!   the store invariant (positive price, non-blank name), [`ProductError`](product_actor::ProductError).
//! - [`clients`] - [`ProductClient`](clients::ProductClient), the typed handle to the store.
//! - [`service`] - [`CatalogService`](service::CatalogService): list, lookup, create with
//!   stock defaulting.
//! - [`validation`] - Aggregate field validation of creation payloads.
//! - [`api`] - The axum router and the mapping of failures to 400/404.
//! - [`lifecycle`] - [`CatalogSystem`](lifecycle::CatalogSystem): explicit wiring, seeding,
//!   shutdown.
//! - [`config`] - CLI/env configuration of the binary.
//!
//! ## 🚀 Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --bind 127.0.0.1:8080
//! curl -X POST localhost:8080/products \
//!      -H 'content-type: application/json' \
//!      -d '{"name":"Wireless Mouse","price":29.99,"category":"Electronics","stock":50}'
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod service;
pub mod validation;

pub use config::{CliArgs, ServerConfig};
