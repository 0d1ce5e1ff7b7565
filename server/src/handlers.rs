use std::collections::BTreeMap;

use axum::extract::{Json, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use log::info;
use serde_json::Value;
use tower_http::services::ServeDir;

use crate::item::Item;
use crate::store::SharedStore;

type FieldErrors = BTreeMap<&'static str, &'static str>;

// Handler for GET /items
async fn list_items(store: SharedStore) -> Json<Vec<Item>> {
    info!("GET /items");
    Json(store.lock().all())
}

// Handler for GET /items/:id
async fn get_item(store: SharedStore, Path(id): Path<String>) -> Result<Json<Item>, StatusCode> {
    info!("GET /items/{}", id);
    match store.lock().find_by_id(&id) {
        Some(item) => Ok(Json(item)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

// Handler for POST /items
async fn create_item(store: SharedStore, Json(payload): Json<Value>) -> Response {
    match validate(&payload) {
        Ok((name, price, description)) => {
            let item = store.lock().save(name, price, description);
            info!("POST /items created {}", item.id);
            (StatusCode::CREATED, Json(item)).into_response()
        }
        Err(errors) => {
            info!("POST /items rejected: {:?}", errors);
            (StatusCode::BAD_REQUEST, Json(errors)).into_response()
        }
    }
}

/// Checks a create payload. Field messages accumulate so a client can
/// surface all of them in one notice. A blank description is stored
/// as absent.
fn validate(payload: &Value) -> Result<(String, f64, Option<String>), FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = payload
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
        .to_string();
    if name.is_empty() {
        errors.insert("name", "must not be blank");
    }

    let price = payload.get("price").and_then(Value::as_f64);
    match price {
        None => {
            errors.insert("price", "must be a number");
        }
        Some(value) if value < 0.0 => {
            errors.insert("price", "must not be negative");
        }
        Some(_) => {}
    }

    let description = payload
        .get("description")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string);

    if errors.is_empty() {
        Ok((name, price.unwrap_or(0.0), description))
    } else {
        Err(errors)
    }
}

pub fn create_app(store: SharedStore) -> Router {
    Router::new()
        .route("/items", {
            let list_store = store.clone();
            let create_store = store.clone();
            get(move || list_items(list_store.clone()))
                .post(move |payload| create_item(create_store.clone(), payload))
        })
        .route("/items/:id", {
            let store = store.clone();
            get(move |path| get_item(store.clone(), path))
        })
        // serve the client bundle and stylesheet for every other path
        .fallback_service(
            axum::routing::get_service(ServeDir::new("static")).handle_error(
                |err: std::io::Error| async move {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Unhandled internal error: {}", err),
                    )
                },
            ),
        )
}
