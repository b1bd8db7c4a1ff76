//! # System Lifecycle
//!
//! Wires the catalog together and tears it down again. Construction is explicit:
//!
//! 1. **Store** - spawn the product [`ResourceActor`](actor_framework::ResourceActor) task
//! 2. **Service** - hand the store's client to [`CatalogService`](crate::service::CatalogService)
//! 3. **HTTP** - hand the service to [`api::router`](crate::api::router)
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the store channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` and it logs its final size
//! 3. **Await completion** - wait for the actor task to finish
//!
//! Clones of the service (for instance inside a router) hold clients too, so they must be
//! dropped before [`CatalogSystem::shutdown`] can finish.

pub mod catalog_system;

pub use catalog_system::*;
