use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

use loot_data::ItemId;

use crate::messages::{LootId, PickupFailureReason, PlayerId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LootSpawned {
    pub drop_id: LootId,
    pub item_id: ItemId,
    pub quantity: u32,
    pub position: Vec3,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LootPickedUp {
    pub player_id: PlayerId,
    pub drop_id: LootId,
    pub item_id: ItemId,
    pub quantity: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LootExpired {
    pub drop_id: LootId,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupFailed {
    pub player_id: PlayerId,
    pub drop_id: LootId,
    pub reason: PickupFailureReason,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyLootDrop {
    pub drop_id: LootId,
    pub item_id: ItemId,
    pub quantity: u32,
    pub position: Vec3,
    pub distance: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyLoot {
    pub player_id: PlayerId,
    pub drops: Vec<NearbyLootDrop>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ServerMessage {
    LootSpawned(LootSpawned),
    LootPickedUp(LootPickedUp),
    LootExpired(LootExpired),
    PickupFailed(PickupFailed),
    NearbyLoot(NearbyLoot),
}
