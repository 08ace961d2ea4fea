use axum::body::Bytes;
use axum::extract::{Extension, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::handler::outcome::{INVALID_METHOD, NOT_FOUND, SERVER_UP};
use crate::handler::{Outcome, ProductHandler};

/// Raw query pairs, in request order.
pub type QueryPairs = Query<Vec<(String, String)>>;

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        if self.is_error() {
            tracing::debug!(outcome = ?self, "Answering with an error");
        }
        match self {
            Outcome::Ok(body) => json_response(StatusCode::OK, body),
            Outcome::Created(message) => message_response(StatusCode::CREATED, message),
            Outcome::NotFound => message_response(StatusCode::OK, NOT_FOUND),
            Outcome::BadRequest(reason) => message_response(StatusCode::BAD_REQUEST, reason),
            Outcome::InternalError(reason) => {
                message_response(StatusCode::INTERNAL_SERVER_ERROR, reason)
            }
        }
    }
}

fn json_response(status: StatusCode, body: Vec<u8>) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

fn message_response(status: StatusCode, message: &str) -> Response {
    json_response(status, json!({ "message": message }).to_string().into_bytes())
}

/// First `id` value in the query string. A present but empty `id` counts.
fn first_id(Query(pairs): QueryPairs) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value)
}

pub async fn server_up() -> Response {
    message_response(StatusCode::OK, SERVER_UP)
}

pub async fn invalid_method() -> Response {
    message_response(StatusCode::METHOD_NOT_ALLOWED, INVALID_METHOD)
}

pub async fn list_products(Extension(handler): Extension<ProductHandler>) -> Outcome {
    handler.list().await
}

pub async fn get_product(
    Extension(handler): Extension<ProductHandler>,
    query: QueryPairs,
) -> Outcome {
    handler.get(first_id(query)).await
}

pub async fn add_product(Extension(handler): Extension<ProductHandler>, body: Bytes) -> Outcome {
    handler.create(&body).await
}

pub async fn update_product(
    Extension(handler): Extension<ProductHandler>,
    query: QueryPairs,
    body: Bytes,
) -> Outcome {
    handler.update(first_id(query), &body).await
}

pub async fn delete_product(
    Extension(handler): Extension<ProductHandler>,
    query: QueryPairs,
) -> Outcome {
    handler.delete(first_id(query)).await
}
