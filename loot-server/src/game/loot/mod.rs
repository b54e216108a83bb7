use log::{debug, warn};
use std::time::Duration;

use loot_game_common::messages::{
    server::{LootSpawned, ServerMessage},
    LootId, PlayerId,
};

use crate::game::resources::{
    InsertedLoot, LootRecord, LootRegistry, LootRemovalReason, ServerMessages, WorldEntities,
};

mod proximity_index;
mod spawn_placer;

pub use proximity_index::{within_range, NearbyRecord, ProximityIndex};
pub use spawn_placer::{PlacedDrop, SpawnPlacer};

/// Registers a placed drop, announces it, and releases anything evicted to make room.
pub fn spawn_loot_drop(
    registry: &mut LootRegistry,
    world_entities: &mut WorldEntities,
    server_messages: &mut ServerMessages,
    placed: PlacedDrop,
    dropper_id: Option<PlayerId>,
    now: Duration,
) -> LootId {
    let InsertedLoot { record, evicted } = registry.insert(
        placed.item_id,
        placed.quantity,
        placed.position,
        dropper_id,
        placed.entity,
        now,
    );

    if !evicted.is_empty() {
        warn!(
            "CapacityExceeded: evicted {} oldest loot records to stay within {}",
            evicted.len(),
            registry.max_capacity()
        );
        for evicted_record in evicted.iter() {
            release_loot(world_entities, evicted_record, LootRemovalReason::Evicted);
        }
    }

    debug!(
        "Spawned loot {} ({} x{}) at {}",
        record.id, record.item_id, record.quantity, record.position
    );
    server_messages.send_global_message(ServerMessage::LootSpawned(LootSpawned {
        drop_id: record.id,
        item_id: record.item_id.clone(),
        quantity: record.quantity,
        position: record.position,
    }));

    record.id
}

/// Destroys the entity of a record which has left the registry.
pub fn release_loot(
    world_entities: &mut WorldEntities,
    record: &LootRecord,
    reason: LootRemovalReason,
) {
    if let Some(entity) = record.entity {
        world_entities.factory.destroy_entity(entity);
    }

    debug!(
        "Removed loot {} ({} x{}) reason {}",
        record.id, record.item_id, record.quantity, reason
    );
}
