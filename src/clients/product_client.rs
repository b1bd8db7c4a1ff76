//! # Product Client
//!
//! The store-facing API of the catalog. It wraps a `ResourceClient<Product>` and exposes
//! `find_all`, `find_by_id` and `save` with catalog errors.
use crate::model::{Product, ProductId};
use crate::product_actor::ProductError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    /// Snapshot of every stored product, in no particular order.
    pub async fn find_all(&self) -> Result<Vec<Product>, ProductError> {
        self.list().await
    }

    pub async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        self.get(id.clone()).await
    }

    /// Inserts or replaces a product, assigning an id when it has none.
    ///
    /// Returns the stored product so the caller sees the generated id.
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn save(&self, product: Product) -> Result<Product, ProductError> {
        debug!(?product, "Sending request");
        self.inner.save(product).await.map_err(ProductError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_get, expect_list, expect_save};

    #[tokio::test]
    async fn test_save_forwards_product_and_returns_stored_copy() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let save_task = tokio::spawn(async move {
            product_client
                .save(Product::new("Widget", 5.0, 2).with_category("Tools"))
                .await
        });

        let (entity, responder) = expect_save(&mut receiver)
            .await
            .expect("Expected Save request");
        assert_eq!(entity.name, "Widget");
        assert_eq!(entity.category.as_deref(), Some("Tools"));
        assert!(entity.id.is_none());

        let mut stored = entity;
        stored.id = Some(ProductId::from("product-1"));
        responder.send(Ok(stored)).unwrap();

        let result = save_task.await.unwrap().unwrap();
        assert_eq!(result.id, Some(ProductId::from("product-1")));
    }

    #[tokio::test]
    async fn test_find_all_returns_listed_products() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let list_task = tokio::spawn(async move { product_client.find_all().await });

        let responder = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        let mut stored = Product::new("Widget", 5.0, 3);
        stored.id = Some(ProductId::from("product-1"));
        responder.send(Ok(vec![stored.clone()])).unwrap();

        assert_eq!(list_task.await.unwrap(), Ok(vec![stored]));
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let find_task = tokio::spawn(async move {
            product_client
                .find_by_id(&ProductId::from("does-not-exist"))
                .await
        });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id.as_str(), "does-not-exist");
        responder.send(Ok(None)).unwrap();

        assert_eq!(find_task.await.unwrap(), Ok(None));
    }

    #[tokio::test]
    async fn test_save_rejection_surfaces_as_invalid_product() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let save_task =
            tokio::spawn(async move { product_client.save(Product::new("Widget", 5.0, 0)).await });

        let (_, responder) = expect_save(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                ProductError::InvalidProduct("price must be positive".into()),
            ))))
            .unwrap();

        assert_eq!(
            save_task.await.unwrap(),
            Err(ProductError::InvalidProduct("price must be positive".into()))
        );
    }

    #[tokio::test]
    async fn test_store_gone_is_unavailable() {
        let (client, receiver) = create_mock_client::<Product>(10);
        drop(receiver);
        let product_client = ProductClient::new(client);

        let result = product_client.find_all().await;
        assert!(matches!(result, Err(ProductError::StoreUnavailable(_))));
    }
}
