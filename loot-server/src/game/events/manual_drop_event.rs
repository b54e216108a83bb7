use bevy::{math::Vec3, prelude::Event};

use loot_data::ItemId;
use loot_game_common::messages::PlayerId;

#[derive(Clone, Debug, Event)]
pub struct ManualDropEvent {
    pub player_id: PlayerId,
    pub item_id: ItemId,
    pub quantity: u32,
    pub position: Vec3,
}
