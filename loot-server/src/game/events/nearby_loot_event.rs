use bevy::{
    math::Vec3,
    prelude::{Entity, Event},
};

use loot_game_common::messages::PlayerId;

#[derive(Clone, Debug, Event)]
pub struct NearbyLootEvent {
    pub client: Entity,
    pub player_id: PlayerId,
    pub position: Vec3,
    pub radius: f32,
}
