//! Client for the remote item collection: list, fetch by id, create.
//! Every call resolves to an explicit outcome the caller matches on;
//! nothing is retried.

use serde_json::Value;
use thiserror::Error;

use crate::item::{Item, NewItem};

const API_PATH: &str = "/items";

/// The two failure classes surfaced to the controllers. A 404 on a
/// single-item lookup is an expected outcome, not an error; it comes
/// back as `Ok(None)` from [`fetch_item`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("connection error: {0}")]
    Connection(String),
    #[error("{0}")]
    Rejected(String),
}

fn connection(err: reqwest::Error) -> ApiError {
    ApiError::Connection(err.to_string())
}

// Resolved against the page origin so the bundle works wherever it is
// served from. Outside a browser the origin is empty.
fn endpoint(suffix: &str) -> String {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}{API_PATH}{suffix}")
}

pub async fn list_items() -> Result<Vec<Item>, ApiError> {
    let response = reqwest::get(endpoint("")).await.map_err(connection)?;
    response.json::<Vec<Item>>().await.map_err(connection)
}

pub async fn fetch_item(id: &str) -> Result<Option<Item>, ApiError> {
    let response = reqwest::get(endpoint(&format!("/{id}")))
        .await
        .map_err(connection)?;
    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !response.status().is_success() {
        return Err(ApiError::Rejected(format!(
            "lookup failed with status {}",
            response.status()
        )));
    }
    response.json::<Item>().await.map(Some).map_err(connection)
}

pub async fn create_item(new_item: &NewItem) -> Result<Item, ApiError> {
    let response = reqwest::Client::new()
        .post(endpoint(""))
        .json(new_item)
        .send()
        .await
        .map_err(connection)?;
    if response.status().is_success() {
        return response.json::<Item>().await.map_err(connection);
    }
    let payload = response.json::<Value>().await.map_err(connection)?;
    Err(ApiError::Rejected(rejection_message(&payload)))
}

/// Flattens a server error body into one line. Validation errors
/// arrive as a field -> message object; the messages are joined with
/// `", "` in field-name order.
pub fn rejection_message(payload: &Value) -> String {
    let joined = match payload {
        Value::Object(fields) => fields
            .values()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        Value::String(message) => message.clone(),
        _ => String::new(),
    };
    if joined.is_empty() {
        "Failed to add item.".to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_messages_are_joined_in_field_order() {
        let payload = json!({"name": "required", "price": "must be positive"});
        assert_eq!(rejection_message(&payload), "required, must be positive");
    }

    #[test]
    fn a_single_message_field_passes_through() {
        let payload = json!({"message": "item limit reached"});
        assert_eq!(rejection_message(&payload), "item limit reached");
    }

    #[test]
    fn a_bare_string_body_passes_through() {
        let payload = json!("boom");
        assert_eq!(rejection_message(&payload), "boom");
    }

    #[test]
    fn unusable_payloads_fall_back_to_a_fixed_message() {
        assert_eq!(rejection_message(&json!(null)), "Failed to add item.");
        assert_eq!(rejection_message(&json!({})), "Failed to add item.");
        assert_eq!(rejection_message(&json!(42)), "Failed to add item.");
        assert_eq!(
            rejection_message(&json!({"code": 7})),
            "Failed to add item."
        );
    }
}
