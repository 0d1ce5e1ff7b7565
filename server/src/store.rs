use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::item::Item;

pub type SharedStore = Arc<Mutex<ItemStore>>;

/// In-memory item collection. Ids are assigned here, never by a
/// client; listing order is insertion order; contents live for the
/// process only.
#[derive(Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn save(&mut self, name: String, price: f64, description: Option<String>) -> Item {
        let item = Item {
            id: Uuid::new_v4().to_string(),
            name,
            price,
            description,
        };
        self.items.push(item.clone());
        item
    }

    pub fn find_by_id(&self, id: &str) -> Option<Item> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    pub fn all(&self) -> Vec<Item> {
        self.items.clone()
    }
}

pub fn shared() -> SharedStore {
    Arc::new(Mutex::new(ItemStore::default()))
}
