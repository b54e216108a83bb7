use bevy::ecs::prelude::{EventReader, Res, ResMut};
use log::debug;

use loot_game_common::messages::server::{LootExpired, PickupFailed, ServerMessage};

use crate::game::{
    events::PickupItemEvent,
    loot::release_loot,
    resources::{
        InventoryChannel, LootRegistry, LootRemovalReason, PickupCoordinator, PickupError,
        ServerMessages, ServerTime, WorldEntities,
    },
};

pub fn pickup_item_system(
    mut pickup_item_events: EventReader<PickupItemEvent>,
    inventory_channel: Res<InventoryChannel>,
    server_time: Res<ServerTime>,
    mut pickup_coordinator: ResMut<PickupCoordinator>,
    mut loot_registry: ResMut<LootRegistry>,
    mut world_entities: ResMut<WorldEntities>,
    mut server_messages: ResMut<ServerMessages>,
) {
    for event in pickup_item_events.read() {
        let result = pickup_coordinator.handle_pickup(
            &mut loot_registry,
            event.player_id,
            event.drop_id,
            event.player_position,
            event.client,
            server_time.now,
        );

        let error = match result {
            Ok(pending) => {
                inventory_channel.request_add_item(pending);
                continue;
            }
            Err(error) => error,
        };

        if let PickupError::Expired(record) = &error {
            release_loot(&mut world_entities, record, LootRemovalReason::Expired);
            server_messages.send_global_message(ServerMessage::LootExpired(LootExpired {
                drop_id: record.id,
            }));
        }

        debug!(
            "Player {} failed to pick up drop {}: {}",
            event.player_id, event.drop_id, error
        );
        if let Some(client) = event.client {
            server_messages.send_client_message(
                client,
                ServerMessage::PickupFailed(PickupFailed {
                    player_id: event.player_id,
                    drop_id: event.drop_id,
                    reason: error.reason(),
                }),
            );
        }
    }
}
