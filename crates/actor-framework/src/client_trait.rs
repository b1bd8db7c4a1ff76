//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `get` and `list`
//! methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
///
/// #[derive(Clone, Debug)]
/// struct User { id: Option<u32> }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct UserError(String);
///
/// impl ActorEntity for User {
///     type Id = u32;
///     type Error = UserError;
///     fn id(&self) -> Option<&u32> { self.id.as_ref() }
///     fn assign_id(&mut self, id: u32) { self.id = Some(id); }
/// }
///
/// struct UserClient {
///     inner: ResourceClient<User>,
/// }
///
/// impl ActorClient<User> for UserClient {
///     type Error = UserError;
///
///     fn inner(&self) -> &ResourceClient<User> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         UserError(e.to_string())
///     }
/// }
///
/// async fn usage(client: UserClient) {
///     // get() and list() are provided automatically!
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch a snapshot of every stored entity.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
