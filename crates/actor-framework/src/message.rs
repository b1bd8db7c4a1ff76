//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the operations of a keyed store:
///
/// - **List**: Snapshot of every stored entity. The reply owns its clones, so later
///   saves are never visible through it.
/// - **Get**: Lookup by ID. A missing entity is `Ok(None)`, not an error.
/// - **Save**: Insert-or-replace. Entities without an ID receive a generated one,
///   and the stored value (with its ID) is sent back.
///
/// This type is generic over `T: ActorEntity`, so a product store can only ever
/// receive products.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Save {
        entity: T,
        respond_to: Response<T>,
    },
}
