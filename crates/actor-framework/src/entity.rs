//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a stored type must fulfil to be kept by
//! the generic [`ResourceActor`](crate::ResourceActor). It names the identifier type,
//! gives the actor access to the identifier slot, and offers a save-time hook where the
//! entity can refuse to enter the store.
//!
//! # Identifier Ownership
//! Entities arrive at the actor with or without an identifier. The actor never asks the
//! entity to invent one: when [`ActorEntity::id`] returns `None` the actor draws a fresh id
//! from its own generator and hands it back through [`ActorEntity::assign_id`].
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_save`]
//!
//! The default implementation accepts every entity (`Ok(())`).

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// We use "Associated Types" (`type Id`, `type Error`) to enforce type safety.
/// A `ResourceActor<Product>` only accepts `Product` values keyed by the product's
/// own identifier type, and the compiler rejects anything else.
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., `String`, `Uuid`, a newtype).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + 'static;

    /// The error type returned when the entity refuses to be stored.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier currently assigned to this entity, if any.
    fn id(&self) -> Option<&Self::Id>;

    /// Stores a freshly generated identifier on the entity.
    fn assign_id(&mut self, id: Self::Id);

    /// Called before the entity is inserted into the store.
    ///
    /// Returning an error aborts the save and leaves the store untouched.
    fn on_save(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
