use product_catalog::lifecycle::CatalogSystem;
use product_catalog::model::{Product, ProductCreate, ProductId};
use product_catalog::product_actor::ProductError;
use std::collections::HashSet;

fn params(name: &str, price: f64) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        description: None,
        price,
        category: None,
        stock: None,
    }
}

/// Full end-to-end test of the service against the real store actor.
#[tokio::test]
async fn test_create_get_and_list() {
    let system = CatalogSystem::new(32);
    let service = system.service();

    let created = service
        .create(ProductCreate {
            description: Some("Ergonomic".into()),
            category: Some("Electronics".into()),
            stock: Some(7),
            ..params("Mouse", 12.5)
        })
        .await
        .expect("Failed to create product");
    let id = created.id.clone().expect("Store must assign an id");

    let fetched = service
        .get_by_id(&id)
        .await
        .expect("Failed to get product")
        .expect("Product not found");
    assert_eq!(fetched, created);

    let all = service.list_all().await.unwrap();
    assert_eq!(all, vec![created]);

    drop(service);
    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_ids_are_pairwise_distinct() {
    let system = CatalogSystem::new(8);
    let service = system.service();

    let mut handles = vec![];
    for i in 0..100 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service.create(params(&format!("item-{i}"), 1.0 + i as f64)).await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let product = handle.await.unwrap().unwrap();
        assert!(ids.insert(product.id.unwrap()), "duplicate id");
    }
    assert_eq!(service.list_all().await.unwrap().len(), 100);
}

#[tokio::test]
async fn test_listing_is_order_independent() {
    let system = CatalogSystem::new(32);
    let service = system.service();

    let a = service.create(params("A", 1.0)).await.unwrap();
    let b = service.create(params("B", 2.0)).await.unwrap();

    let listed: HashSet<ProductId> = service
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .filter_map(|p| p.id)
        .collect();
    assert_eq!(listed, HashSet::from([a.id.unwrap(), b.id.unwrap()]));
}

#[tokio::test]
async fn test_never_inserted_id_is_absent() {
    let system = CatalogSystem::new(32);
    let service = system.service();
    service.create(params("A", 1.0)).await.unwrap();

    for id in ["", "does-not-exist", "00000000-0000-0000-0000-000000000000"] {
        assert_eq!(service.get_by_id(&ProductId::from(id)).await, Ok(None));
    }
}

#[tokio::test]
async fn test_store_refuses_non_positive_price() {
    let system = CatalogSystem::new(32);
    let service = system.service();

    let result = service.create(params("Free", 0.0)).await;
    assert!(matches!(result, Err(ProductError::InvalidProduct(_))));
    assert!(service.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_seed_sample_products() {
    let system = CatalogSystem::new(32);
    let seeded = system.seed_sample_products().await.unwrap();
    assert_eq!(seeded.len(), 2);

    let mut names: Vec<String> = system
        .service()
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p: Product| p.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["Classic T-Shirt", "Slim Fit Jeans"]);
    assert!(seeded.iter().all(|p| p.id.is_some()));

    system.shutdown().await.unwrap();
}
