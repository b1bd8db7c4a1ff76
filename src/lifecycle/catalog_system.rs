use crate::clients::ProductClient;
use crate::model::Product;
use crate::product_actor::{self, ProductError};
use crate::service::CatalogService;
use tracing::{error, info};

/// Owns the running catalog: the store actor task and the service built on it.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(32);
/// system.seed_sample_products().await?;
///
/// let app = api::router(system.service());
/// // ... serve ...
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    service: CatalogService,

    /// Task handle for the store actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Spawns the product store and wires the service to it.
    ///
    /// `buffer_size` is the store's request queue capacity.
    pub fn new(buffer_size: usize) -> Self {
        let (actor, client) = product_actor::new(buffer_size);
        let handle = tokio::spawn(actor.run());
        let service = CatalogService::new(ProductClient::new(client));

        Self { service, handle }
    }

    /// A handle to the catalog service. Cheap to clone.
    pub fn service(&self) -> CatalogService {
        self.service.clone()
    }

    /// Stores the two demo products through the normal save path.
    pub async fn seed_sample_products(&self) -> Result<Vec<Product>, ProductError> {
        let samples = [
            Product::new("Classic T-Shirt", 19.99, 100)
                .with_description("Cotton t-shirt in white")
                .with_category("Tops"),
            Product::new("Slim Fit Jeans", 49.99, 50)
                .with_description("Dark blue slim fit jeans")
                .with_category("Bottoms"),
        ];

        let products = self.service.products();
        let mut seeded = Vec::with_capacity(samples.len());
        for sample in samples {
            seeded.push(products.save(sample).await?);
        }
        info!(count = seeded.len(), "Seeded sample products");
        Ok(seeded)
    }

    /// Gracefully shuts down the store.
    ///
    /// Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog...");

        // Dropping the last client closes the channel; the actor's loop then ends.
        drop(self.service);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
