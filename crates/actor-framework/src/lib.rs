//! # Actor Framework
//!
//! This crate provides the building blocks for keeping typed entities in memory behind an
//! actor. A single Tokio task owns a `HashMap` of entities and every read or write is a
//! message sent to that task, so callers share the store without ever touching a lock.
//!
//! ## Why an Actor for a Store?
//!
//! - Isolated state (no shared memory, no locks)
//! - Sequential processing makes each `save` one indivisible step
//! - Readers always receive owned snapshots, never a live view of the map
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model) - Foundational concurrency pattern by Carl Hewitt
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - How a stored type exposes its identifier and guards its invariants
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing, id generation, and the map itself
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct User {
//!     id: Option<u32>,
//!     name: String,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("user name must not be empty")]
//! struct UserError;
//!
//! impl ActorEntity for User {
//!     type Id = u32;
//!     type Error = UserError;
//!
//!     fn id(&self) -> Option<&u32> { self.id.as_ref() }
//!     fn assign_id(&mut self, id: u32) { self.id = Some(id); }
//!     fn on_save(&self) -> Result<(), UserError> {
//!         if self.name.is_empty() { Err(UserError) } else { Ok(()) }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut next = 0;
//!     let (actor, client) = ResourceActor::<User>::new(10, move || { next += 1; next });
//!     tokio::spawn(actor.run());
//!
//!     let alice = client.save(User { id: None, name: "Alice".into() }).await.unwrap();
//!     let id = alice.id.unwrap();
//!     let user = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(user.name, "Alice");
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed!)
//! - Clients are cheap clones of a channel sender and can be shared across request handlers
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, which answers a real `ResourceClient<T>` from a
//! queue of expectations so code built on top of a client can be tested without an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
