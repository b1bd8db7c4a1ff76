//! # Product Actor
//!
//! The catalog store: a [`ResourceActor`] that owns every [`Product`] for the life of the
//! process.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use product_catalog::clients::ProductClient;
//! use product_catalog::model::Product;
//! use product_catalog::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let store = ProductClient::new(client);
//!     let saved = store.save(Product::new("Widget", 5.0, 3)).await?;
//!     assert!(saved.id.is_some());
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Product, ProductId};
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
///
/// Products saved without an id receive a random UUID v4.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size, ProductId::generate)
}
