//! # Catalog Service
//!
//! Sits between the HTTP surface and the store. It owns no state of its own: it turns a
//! validated [`ProductCreate`] into a [`Product`], fills in defaults, and delegates
//! persistence to the [`ProductClient`].

use crate::clients::ProductClient;
use crate::model::{Product, ProductCreate, ProductId};
use crate::product_actor::ProductError;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct CatalogService {
    products: ProductClient,
}

impl CatalogService {
    pub fn new(products: ProductClient) -> Self {
        Self { products }
    }

    pub(crate) fn products(&self) -> &ProductClient {
        &self.products
    }

    /// Every stored product. Order is unspecified.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.products.find_all().await?;
        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        self.products.find_by_id(id).await
    }

    /// Stores a new product built from `params`, with stock defaulting to 0.
    ///
    /// The returned product carries the identifier the store generated.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create(&self, params: ProductCreate) -> Result<Product, ProductError> {
        let product = self.products.save(Product::from(params)).await?;
        if let Some(id) = &product.id {
            info!(%id, "Product created");
        }
        Ok(product)
    }
}
