//! Error types for the Product store.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
///
/// A product that does not exist is not an error; lookups return `Ok(None)`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The product violates an invariant the store enforces on every save.
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// The store actor is no longer running.
    #[error("Product store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(product_error) => *product_error,
                Err(other) => ProductError::InvalidProduct(other.to_string()),
            },
            closed @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                ProductError::StoreUnavailable(closed.to_string())
            }
        }
    }
}
