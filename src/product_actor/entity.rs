//! Entity trait implementation for the Product domain type.
//!
//! Both hooks enforce a non-negative `quantity`. The store rejects the write
//! and keeps its previous state when the check fails.

use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductUpdate};

fn check_quantity(quantity: i64) -> Result<(), ProductError> {
    if quantity < 0 {
        return Err(ProductError::InvalidQuantity(quantity));
    }
    Ok(())
}

impl ActorEntity for Product {
    type Id = String;
    type Update = ProductUpdate;
    type Error = ProductError;

    fn id(&self) -> &String {
        &self.id
    }

    fn on_put(&self) -> Result<(), ProductError> {
        check_quantity(self.quantity)
    }

    /// Replaces `name` and `quantity`; the id never changes.
    fn on_update(&mut self, update: ProductUpdate) -> Result<(), ProductError> {
        check_quantity(update.quantity)?;
        self.name = update.name;
        self.quantity = update.quantity;
        Ok(())
    }
}
