use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

/// Body of a create request. The id is assigned by the server.
#[derive(Clone, Serialize, Debug)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    pub description: String,
}
