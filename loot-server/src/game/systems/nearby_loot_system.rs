use bevy::ecs::prelude::{EventReader, Res, ResMut};

use loot_game_common::messages::server::{NearbyLoot, NearbyLootDrop, ServerMessage};

use crate::game::{
    events::NearbyLootEvent,
    loot::ProximityIndex,
    resources::{LootRegistry, ServerMessages},
};

pub fn nearby_loot_system(
    mut nearby_loot_events: EventReader<NearbyLootEvent>,
    loot_registry: Res<LootRegistry>,
    mut server_messages: ResMut<ServerMessages>,
) {
    let proximity_index = ProximityIndex::new(&loot_registry);

    for event in nearby_loot_events.read() {
        let drops = proximity_index
            .nearby(event.position, event.radius)
            .into_iter()
            .map(|nearby| NearbyLootDrop {
                drop_id: nearby.record.id,
                item_id: nearby.record.item_id.clone(),
                quantity: nearby.record.quantity,
                position: nearby.record.position,
                distance: nearby.distance,
            })
            .collect();

        server_messages.send_client_message(
            event.client,
            ServerMessage::NearbyLoot(NearbyLoot {
                player_id: event.player_id,
                drops,
            }),
        );
    }
}
