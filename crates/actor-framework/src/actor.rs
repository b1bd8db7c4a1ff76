//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that owns a keyed
//! collection of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Boxed identifier generator owned by the actor.
type IdGenerator<Id> = Box<dyn FnMut() -> Id + Send>;

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Any number of `ResourceClient` clones may send requests at the same time, but the
/// actor handles them one after another in its loop. No `Mutex` or `RwLock` guards the
/// `store`: exclusive ownership inside the task is what makes every save atomic and
/// every read consistent.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` with a channel capacity and an id generator.
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Use**: Clone the returned `ResourceClient` wherever the store is needed.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: Option<u64>, text: String }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("empty note")]
/// struct NoteError;
///
/// impl ActorEntity for Note {
///     type Id = u64;
///     type Error = NoteError;
///
///     fn id(&self) -> Option<&u64> { self.id.as_ref() }
///     fn assign_id(&mut self, id: u64) { self.id = Some(id); }
///     fn on_save(&self) -> Result<(), NoteError> {
///         if self.text.is_empty() { Err(NoteError) } else { Ok(()) }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut counter = 0;
///     let (actor, client) = ResourceActor::<Note>::new(10, move || {
///         counter += 1;
///         counter
///     });
///     tokio::spawn(actor.run());
///
///     let saved = client.save(Note { id: None, text: "hello".into() }).await.unwrap();
///     assert_eq!(saved.id, Some(1));
///     assert!(client.save(Note { id: None, text: String::new() }).await.is_err());
/// }
/// ```
///
/// # Operations
///
/// * **List**: clones every stored entity into a fresh `Vec`.
/// * **Get**: returns a clone of the entity if found, or `None`.
/// * **Save**:
///     1. Calls the `on_save` hook; a rejection is reported and nothing is stored.
///     2. Keeps the entity's own ID, or draws one from the generator that is not
///        already present in the store.
///     3. Inserts or replaces the keyed slot.
///     4. Returns the stored entity.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: IdGenerator<T::Id>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `next_id` - Generator used for entities saved without an identifier.
    pub fn new(
        buffer_size: usize,
        next_id: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: Box::new(next_id),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn fresh_id(&mut self) -> T::Id {
        loop {
            let id = (self.next_id)();
            if !self.store.contains_key(&id) {
                return id;
            }
            warn!(%id, "Generated id already in use, drawing again");
        }
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "product_catalog::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Save {
                    mut entity,
                    respond_to,
                } => {
                    debug!(entity_type, ?entity, "Save");
                    if let Err(e) = entity.on_save() {
                        warn!(entity_type, error = %e, "Save rejected");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }

                    let id = match entity.id() {
                        Some(id) => id.clone(),
                        None => {
                            let id = self.fresh_id();
                            entity.assign_id(id.clone());
                            id
                        }
                    };

                    let replaced = self.store.insert(id.clone(), entity.clone()).is_some();
                    info!(entity_type, %id, replaced, size = self.store.len(), "Saved");
                    let _ = respond_to.send(Ok(entity));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
