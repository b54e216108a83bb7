use bevy::{math::Vec3, prelude::Event};

use loot_data::CreatureType;
use loot_game_common::messages::PlayerId;

#[derive(Clone, Debug, Event)]
pub struct CreatureDeathEvent {
    pub creature_type: CreatureType,
    pub position: Vec3,
    pub killer_id: Option<PlayerId>,
}
