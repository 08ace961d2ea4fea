//! HTTP surface of the product store.
//!
//! Paths and methods follow the service's historical contract:
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | `GET` | `/get-products` | list |
//! | `GET` | `/get-product?id=` | get |
//! | `POST` | `/add-product` | create |
//! | `PUT` | `/update-products?id=` | update |
//! | `DELETE` | `/delete-products?id=` | delete |
//!
//! Any other method on those paths answers `405`, including `HEAD` on the reads. Every other path, including `/`,
//! answers the liveness message.

pub mod routes;

use axum::extract::Extension;
use axum::routing::{any, delete, get, post, put};
use axum::Router;

use crate::handler::ProductHandler;
use routes::*;

pub fn router(handler: ProductHandler) -> Router {
    Router::new()
        .route("/", any(server_up))
        .route(
            "/get-products",
            get(list_products).head(invalid_method).fallback(invalid_method),
        )
        .route(
            "/get-product",
            get(get_product).head(invalid_method).fallback(invalid_method),
        )
        .route("/add-product", post(add_product).fallback(invalid_method))
        .route("/update-products", put(update_product).fallback(invalid_method))
        .route("/delete-products", delete(delete_product).fallback(invalid_method))
        .fallback(server_up)
        .layer(Extension(handler))
}
