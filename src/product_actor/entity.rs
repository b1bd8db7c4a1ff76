//! ActorEntity trait implementation for the Product domain type.
//!
//! This is where the store's own invariants live: whatever path a product takes into
//! the store, it is refused unless it has a name and a finite, positive price.

use super::error::ProductError;
use crate::model::{Product, ProductId};
use actor_framework::ActorEntity;

impl ActorEntity for Product {
    type Id = ProductId;
    type Error = ProductError;

    fn id(&self) -> Option<&ProductId> {
        self.id.as_ref()
    }

    fn assign_id(&mut self, id: ProductId) {
        self.id = Some(id);
    }

    /// Rejects products with a blank name or a price that is not strictly positive.
    fn on_save(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::InvalidProduct("name must not be blank".into()));
        }
        if !(self.price.is_finite() && self.price > 0.0) {
            return Err(ProductError::InvalidProduct(format!(
                "price must be positive, got {}",
                self.price
            )));
        }
        Ok(())
    }
}
