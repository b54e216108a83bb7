use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct ItemId(String);

id_wrapper_impl!(ItemId, String);

fn default_max_stack() -> u32 {
    1
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemData {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_max_stack")]
    pub max_stack: u32,
}

impl ItemData {
    /// Name for logs, the id when the item has no name.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.id.get()
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Error)]
pub enum ItemDatabaseError {
    #[error("failed to read item file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse item list")]
    Json(#[from] serde_json::Error),

    #[error("item {0} is defined more than once")]
    DuplicateItem(ItemId),

    #[error("item {0} must have a max stack of at least 1")]
    InvalidMaxStack(ItemId),
}

#[derive(Default)]
pub struct ItemDatabase {
    items: HashMap<ItemId, ItemData>,
}

impl ItemDatabase {
    pub fn new(items: Vec<ItemData>) -> Result<Self, ItemDatabaseError> {
        let mut database = Self::default();

        for item in items {
            if item.max_stack == 0 {
                return Err(ItemDatabaseError::InvalidMaxStack(item.id));
            }

            if database.items.contains_key(&item.id) {
                return Err(ItemDatabaseError::DuplicateItem(item.id));
            }

            database.items.insert(item.id.clone(), item);
        }

        Ok(database)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ItemDatabaseError> {
        let items: Vec<ItemData> = serde_json::from_str(json)?;
        Self::new(items)
    }

    pub fn load(path: &Path) -> Result<Self, ItemDatabaseError> {
        let json = std::fs::read_to_string(path).map_err(|source| ItemDatabaseError::Io {
            path: path.to_string_lossy().into_owned(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn get_item(&self, id: &ItemId) -> Option<&ItemData> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
