use bevy::{
    math::Vec3,
    prelude::{Entity, Event},
};

use loot_game_common::messages::{LootId, PlayerId};

#[derive(Clone, Debug, Event)]
pub struct PickupItemEvent {
    pub client: Option<Entity>,
    pub player_id: PlayerId,
    pub drop_id: LootId,
    pub player_position: Vec3,
}
