use product_store::clients::ActorClient;
use product_store::lifecycle::ProductSystem;
use product_store::model::{Product, ProductUpdate};
use product_store::product_actor::ProductError;
use std::collections::BTreeSet;

/// Full lifecycle of one product through the real actor.
#[tokio::test]
async fn test_product_lifecycle() {
    let system = ProductSystem::new(32);
    let client = &system.product_client;

    // Create, then fetch returns an equal record
    let galaxy = Product::new("001", "Samsung Galaxy S1", 10);
    client
        .create_product(galaxy.clone())
        .await
        .expect("Failed to create product");
    let fetched = client
        .get("001".to_string())
        .await
        .expect("Failed to get product");
    assert_eq!(fetched, Some(galaxy));

    // Update keeps the id and replaces the fields
    let updated = client
        .update_product("001".to_string(), ProductUpdate::new("Samsung Galaxy S2", 3))
        .await
        .expect("Failed to update product");
    assert_eq!(updated, Some(Product::new("001", "Samsung Galaxy S2", 3)));
    let fetched = client.get("001".to_string()).await.unwrap();
    assert_eq!(fetched, Some(Product::new("001", "Samsung Galaxy S2", 3)));

    // Delete returns the removed record
    let removed = client.delete("001".to_string()).await.unwrap();
    assert_eq!(removed, Some(Product::new("001", "Samsung Galaxy S2", 3)));
    assert!(client.get("001".to_string()).await.unwrap().is_none());

    system.shutdown().await.expect("Failed to shut down");
}

#[tokio::test]
async fn test_create_twice_overwrites() {
    let system = ProductSystem::new(32);
    let client = &system.product_client;

    client
        .create_product(Product::new("001", "First", 1))
        .await
        .unwrap();
    let replaced = client
        .create_product(Product::new("001", "Second", 2))
        .await
        .unwrap();

    assert_eq!(replaced, Some(Product::new("001", "First", 1)));
    assert_eq!(
        client.list().await.unwrap(),
        vec![Product::new("001", "Second", 2)]
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_is_exclusive() {
    let system = ProductSystem::new(32);
    let client = &system.product_client;

    for (id, name) in [("001", "Galaxy"), ("002", "Nokia"), ("003", "Pixel")] {
        client
            .create_product(Product::new(id, name, 1))
            .await
            .unwrap();
    }

    client.delete("002".to_string()).await.unwrap();

    assert!(client.get("002".to_string()).await.unwrap().is_none());
    assert_eq!(
        client.get("001".to_string()).await.unwrap(),
        Some(Product::new("001", "Galaxy", 1))
    );
    assert_eq!(
        client.get("003".to_string()).await.unwrap(),
        Some(Product::new("003", "Pixel", 1))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_id_is_absent_not_failed() {
    let system = ProductSystem::new(32);
    let client = &system.product_client;

    assert_eq!(client.get("Z".to_string()).await, Ok(None));
    assert_eq!(
        client
            .update_product("Z".to_string(), ProductUpdate::new("ghost", 1))
            .await,
        Ok(None)
    );
    assert_eq!(client.delete("Z".to_string()).await, Ok(None));
    assert!(client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_negative_quantity_is_rejected_without_mutation() {
    let system = ProductSystem::new(32);
    let client = &system.product_client;

    assert_eq!(
        client
            .create_product(Product::new("001", "Broken", -1))
            .await,
        Err(ProductError::InvalidQuantity(-1))
    );
    assert!(client.get("001".to_string()).await.unwrap().is_none());

    client
        .create_product(Product::new("001", "Kept", 4))
        .await
        .unwrap();
    assert_eq!(
        client
            .update_product("001".to_string(), ProductUpdate::new("Lost", -9))
            .await,
        Err(ProductError::InvalidQuantity(-9))
    );
    assert_eq!(
        client.get("001".to_string()).await.unwrap(),
        Some(Product::new("001", "Kept", 4))
    );

    system.shutdown().await.unwrap();
}

/// Concurrent writers to one id end in the state of exactly one of them.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_updates_never_mix_fields() {
    let system = ProductSystem::new(4);
    let client = system.product_client.clone();
    client
        .create_product(Product::new("001", "name-0", 0))
        .await
        .unwrap();

    let writers: Vec<_> = (1..=64)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                client
                    .update_product("001".to_string(), ProductUpdate::new(format!("name-{i}"), i))
                    .await
            })
        })
        .collect();

    // Readers racing the writers only ever see a whole update.
    let readers: Vec<_> = (0..16)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move {
                for _ in 0..8 {
                    let product = client.get("001".to_string()).await.unwrap().unwrap();
                    assert_eq!(product.name, format!("name-{}", product.quantity));
                }
            })
        })
        .collect();

    for writer in writers {
        let updated = writer.await.unwrap().unwrap().unwrap();
        assert_eq!(updated.name, format!("name-{}", updated.quantity));
    }
    for reader in readers {
        reader.await.unwrap();
    }

    let last = client.get("001".to_string()).await.unwrap().unwrap();
    assert_eq!(last.id, "001");
    assert!((1..=64).contains(&last.quantity));
    assert_eq!(last.name, format!("name-{}", last.quantity));

    drop(client);
    system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_list_sees_exactly_the_committed_ids() {
    let system = ProductSystem::new(8);
    let client = system.product_client.clone();

    let creators: Vec<_> = (0..50)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                client
                    .create_product(Product::new(format!("{i:03}"), "item", i))
                    .await
            })
        })
        .collect();
    for creator in creators {
        creator.await.unwrap().unwrap();
    }

    let ids: BTreeSet<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    let expected: BTreeSet<String> = (0..50).map(|i| format!("{i:03}")).collect();
    assert_eq!(ids, expected);

    drop(client);
    system.shutdown().await.unwrap();
}
