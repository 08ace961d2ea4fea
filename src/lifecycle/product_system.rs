use crate::clients::ProductClient;
use crate::model::Product;
use crate::product_actor::ProductError;
use tracing::{error, info};

/// Errors raised while starting or stopping the system.
#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error("Failed to seed product {id}: {source}")]
    Seed {
        id: String,
        #[source]
        source: ProductError,
    },
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the product store.
///
/// `ProductSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the store actor
/// - **Client Distribution**: Handing out the [`ProductClient`] that request handlers clone
///
/// # Example
///
/// ```ignore
/// let system = ProductSystem::new(32);
///
/// system.product_client.create_product(product).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct ProductSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl ProductSystem {
    /// Spawns the product actor with a mailbox of `mailbox_size` requests.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(mailbox_size: usize) -> Self {
        let (product_actor, product_client) = crate::product_actor::new(mailbox_size);
        let handle = tokio::spawn(product_actor.run());

        Self {
            product_client,
            handle,
        }
    }

    /// Stores the demo catalogue the service historically booted with.
    pub async fn seed_demo_data(&self) -> Result<(), SystemError> {
        for product in demo_products() {
            let id = product.id.clone();
            self.product_client
                .create_product(product)
                .await
                .map_err(|source| SystemError::Seed { id, source })?;
        }
        info!("Seeded demo products");
        Ok(())
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the mailbox once every clone held elsewhere
    /// (e.g., by the HTTP router) is gone too; the actor then drains what is
    /// queued and exits. Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e.into());
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

fn demo_products() -> Vec<Product> {
    vec![
        Product::new("001", "Samsung Galaxy S1", 10),
        Product::new("002", "Nokia 6", 5),
    ]
}
