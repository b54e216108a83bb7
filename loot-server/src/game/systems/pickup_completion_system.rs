use bevy::ecs::prelude::{Res, ResMut};
use log::{debug, info};

use loot_game_common::messages::server::{LootPickedUp, PickupFailed, ServerMessage};

use crate::game::{
    loot::release_loot,
    resources::{
        GameData, InventoryChannel, LootRegistry, LootRemovalReason, PickupCompletion,
        PickupCoordinator, ServerMessages, WorldEntities,
    },
};

pub fn pickup_completion_system(
    inventory_channel: Res<InventoryChannel>,
    game_data: Res<GameData>,
    mut pickup_coordinator: ResMut<PickupCoordinator>,
    mut loot_registry: ResMut<LootRegistry>,
    mut world_entities: ResMut<WorldEntities>,
    mut server_messages: ResMut<ServerMessages>,
) {
    while let Ok(PickupCompletion { pending, result }) = inventory_channel.completion_rx.try_recv()
    {
        match pickup_coordinator.complete_pickup(&mut loot_registry, &pending, result) {
            Ok(removed) => {
                match removed {
                    Some(record) => {
                        release_loot(&mut world_entities, &record, LootRemovalReason::PickedUp)
                    }
                    None => debug!(
                        "Drop {} left the world before the pickup by player {} completed",
                        pending.drop_id, pending.player_id
                    ),
                }

                info!(
                    "Player {} picked up {} x{}",
                    pending.player_id,
                    game_data
                        .items
                        .get_item(&pending.item_id)
                        .map_or(pending.item_id.get(), |item| item.display_name()),
                    pending.quantity
                );
                server_messages.send_global_message(ServerMessage::LootPickedUp(LootPickedUp {
                    player_id: pending.player_id,
                    drop_id: pending.drop_id,
                    item_id: pending.item_id,
                    quantity: pending.quantity,
                }));
            }
            Err(error) => {
                if let Some(client) = pending.client {
                    server_messages.send_client_message(
                        client,
                        ServerMessage::PickupFailed(PickupFailed {
                            player_id: pending.player_id,
                            drop_id: pending.drop_id,
                            reason: error.reason(),
                        }),
                    );
                }
            }
        }
    }
}
