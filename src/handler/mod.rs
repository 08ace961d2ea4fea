//! Per-operation validation and dispatch.
//!
//! Each [`ProductHandler`] method takes the raw inputs of one request, validates
//! them, makes exactly one store call, and turns the result into an [`Outcome`].
//! The handler keeps no state between requests; everything lives in the store.

pub mod outcome;

pub use outcome::Outcome;

use crate::clients::{ActorClient, ProductClient};
use crate::model::{Product, ProductUpdate};
use crate::product_actor::ProductError;
use outcome::{
    CREATED, MISSING_ID, NEGATIVE_QUANTITY, PARSE_DATA_ERROR, PARSE_PRODUCT_ERROR,
    STORE_UNAVAILABLE,
};
use tracing::{debug, error, instrument, warn};

/// Maps the five product operations onto store calls.
#[derive(Clone)]
pub struct ProductHandler {
    client: ProductClient,
}

impl ProductHandler {
    pub fn new(client: ProductClient) -> Self {
        Self { client }
    }

    /// Every stored product.
    #[instrument(name = "list", skip(self))]
    pub async fn list(&self) -> Outcome {
        match self.client.list().await {
            Ok(products) => Outcome::encode(&products, PARSE_DATA_ERROR),
            Err(e) => store_failure(e),
        }
    }

    /// The product stored under `id`.
    #[instrument(name = "get", skip(self))]
    pub async fn get(&self, id: Option<String>) -> Outcome {
        let Some(id) = id else {
            return missing_id();
        };
        match self.client.get(id).await {
            Ok(Some(product)) => Outcome::encode(&product, PARSE_DATA_ERROR),
            Ok(None) => Outcome::NotFound,
            Err(e) => store_failure(e),
        }
    }

    /// Stores the product encoded in `body`, replacing any product with the same id.
    #[instrument(name = "create", skip(self, body))]
    pub async fn create(&self, body: &[u8]) -> Outcome {
        let product: Product = match serde_json::from_slice(body) {
            Ok(product) => product,
            Err(e) => {
                warn!(error = %e, "Malformed product payload");
                return Outcome::InternalError(PARSE_DATA_ERROR);
            }
        };
        match self.client.create_product(product).await {
            Ok(_) => Outcome::Created(CREATED),
            Err(e) => store_failure(e),
        }
    }

    /// Replaces `name` and `quantity` of the product stored under `id`.
    ///
    /// The existence check and the write happen inside the store as one step. An
    /// unknown id is reported as not found even when the payload is malformed.
    #[instrument(name = "update", skip(self, body))]
    pub async fn update(&self, id: Option<String>, body: &[u8]) -> Outcome {
        let Some(id) = id else {
            return missing_id();
        };
        let update: ProductUpdate = match serde_json::from_slice(body) {
            Ok(update) => update,
            Err(e) => {
                warn!(error = %e, "Malformed update payload");
                return match self.client.get(id).await {
                    Ok(Some(_)) => Outcome::InternalError(PARSE_PRODUCT_ERROR),
                    Ok(None) => Outcome::NotFound,
                    Err(e) => store_failure(e),
                };
            }
        };
        match self.client.update_product(id, update).await {
            Ok(Some(product)) => Outcome::encode(&product, PARSE_PRODUCT_ERROR),
            Ok(None) => Outcome::NotFound,
            Err(e) => store_failure(e),
        }
    }

    /// Removes the product stored under `id` and returns it.
    #[instrument(name = "delete", skip(self))]
    pub async fn delete(&self, id: Option<String>) -> Outcome {
        let Some(id) = id else {
            return missing_id();
        };
        match self.client.delete(id).await {
            Ok(Some(product)) => Outcome::encode(&product, PARSE_DATA_ERROR),
            Ok(None) => Outcome::NotFound,
            Err(e) => store_failure(e),
        }
    }
}

fn missing_id() -> Outcome {
    debug!("Rejected: no id");
    Outcome::BadRequest(MISSING_ID)
}

fn store_failure(e: ProductError) -> Outcome {
    match e {
        ProductError::InvalidQuantity(quantity) => {
            warn!(quantity, "Rejected: negative quantity");
            Outcome::BadRequest(NEGATIVE_QUANTITY)
        }
        ProductError::ActorCommunicationError(msg) => {
            error!(error = %msg, "Store unavailable");
            Outcome::InternalError(STORE_UNAVAILABLE)
        }
    }
}
