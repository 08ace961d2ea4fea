//! The closed set of results a handled request can produce.
//!
//! Outcomes carry no transport detail; the HTTP layer maps each variant to a
//! status code and a JSON body (see [`crate::api`]).

use serde::Serialize;
use tracing::error;

pub const SERVER_UP: &str = "server is up";
pub const INVALID_METHOD: &str = "invalid http method";
pub const MISSING_ID: &str = "required product id";
pub const NOT_FOUND: &str = "product not found";
pub const CREATED: &str = "success create product";
pub const PARSE_DATA_ERROR: &str = "error when parsing data";
pub const PARSE_PRODUCT_ERROR: &str = "error when parsing product";
pub const NEGATIVE_QUANTITY: &str = "quantity must not be negative";
pub const STORE_UNAVAILABLE: &str = "internal server error";

/// Result of one handled request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Success carrying an already-encoded JSON payload.
    Ok(Vec<u8>),
    /// A record was stored.
    Created(&'static str),
    /// No record exists for the requested id. Not an error.
    NotFound,
    /// The caller sent an unusable request; the store was not changed.
    BadRequest(&'static str),
    /// Decoding, encoding, or the store itself failed.
    InternalError(&'static str),
}

impl Outcome {
    /// Encodes `value` as the success payload, reporting `on_error` if encoding fails.
    pub fn encode<T: Serialize + ?Sized>(value: &T, on_error: &'static str) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Outcome::Ok(body),
            Err(e) => {
                error!(error = %e, "Failed to encode response");
                Outcome::InternalError(on_error)
            }
        }
    }

    /// True for the outcomes a client should treat as a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::BadRequest(_) | Outcome::InternalError(_))
    }
}
