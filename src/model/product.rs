use serde::{Deserialize, Serialize};

/// A product record held by the store.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
/// See [`crate::product_actor::entity`] for the validation rules.
///
/// The wire shape is `{"id": string, "name": string, "quantity": integer}`. A field
/// missing from the payload decodes to its empty value (`""` or `0`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub quantity: i64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Caller-chosen key, treated as opaque
    /// * `name` - Product name
    /// * `quantity` - Stock count
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
        }
    }
}

/// Replacement values for an existing product's mutable fields.
///
/// Missing fields decode to their empty value; an `id` field in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductUpdate {
    pub name: String,
    pub quantity: i64,
}

impl ProductUpdate {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_shape() {
        let product = Product::new("001", "Samsung Galaxy S1", 10);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "001", "name": "Samsung Galaxy S1", "quantity": 10})
        );
    }

    #[test]
    fn test_update_ignores_id_field() {
        let update: ProductUpdate =
            serde_json::from_str(r#"{"id":"999","name":"Nokia 6","quantity":5}"#).unwrap();
        assert_eq!(update, ProductUpdate::new("Nokia 6", 5));
    }

    #[test]
    fn test_missing_fields_decode_to_empty_values() {
        let product: Product = serde_json::from_str(r#"{"id":"003","name":"x"}"#).unwrap();
        assert_eq!(product, Product::new("003", "x", 0));

        let update: ProductUpdate = serde_json::from_str(r#"{"quantity":7}"#).unwrap();
        assert_eq!(update, ProductUpdate::new("", 7));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = serde_json::from_str::<Product>(r#"{"id":"001","quantity":"many"}"#);
        assert!(result.is_err());
        assert!(serde_json::from_str::<ProductUpdate>("[1, 2]").is_err());
    }
}
