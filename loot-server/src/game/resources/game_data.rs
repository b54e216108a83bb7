use bevy::prelude::Resource;
use std::sync::Arc;

use loot_data::{DropTableDatabase, ItemDatabase};
use loot_game_common::data::{DropResolver, TieredDropResolver};

#[derive(Resource)]
pub struct GameData {
    pub items: Arc<ItemDatabase>,
    pub drop_tables: Arc<DropTableDatabase>,
    pub drop_resolver: Box<dyn DropResolver + Send + Sync>,
}

impl GameData {
    pub fn new(items: Arc<ItemDatabase>, drop_tables: Arc<DropTableDatabase>) -> Self {
        Self {
            drop_resolver: Box::new(TieredDropResolver::new(
                drop_tables.clone(),
                items.clone(),
            )),
            items,
            drop_tables,
        }
    }
}
