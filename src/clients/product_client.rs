use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductUpdate};
use crate::product_actor::ProductError;
use async_trait::async_trait;
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

    /// Stores `product` under its id, overwriting any existing record in full.
    ///
    /// Returns the record that was replaced, if there was one.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn create_product(&self, product: Product) -> Result<Option<Product>, ProductError> {
        debug!(?product, "create_product called");
        self.inner.put(product).await.map_err(Self::map_error)
    }

    /// Replaces `name` and `quantity` of the product stored under `id` in one
    /// atomic step. Returns `None` when no such product exists.
    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: String,
        update: ProductUpdate,
    ) -> Result<Option<Product>, ProductError> {
        debug!(?update, "update_product called");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(source) => match source.downcast::<ProductError>() {
                Ok(err) => *err,
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
