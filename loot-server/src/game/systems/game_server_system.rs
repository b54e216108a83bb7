use bevy::ecs::{
    prelude::{Entity, EventWriter, Query},
    system::SystemParam,
};
use log::warn;

use loot_game_common::messages::client::ClientMessage;

use crate::game::{
    components::GameClient,
    events::{CreatureDeathEvent, ManualDropEvent, NearbyLootEvent, PickupItemEvent},
};

#[derive(SystemParam)]
pub struct LootEvents<'w> {
    creature_death_events: EventWriter<'w, CreatureDeathEvent>,
    manual_drop_events: EventWriter<'w, ManualDropEvent>,
    nearby_loot_events: EventWriter<'w, NearbyLootEvent>,
    pickup_item_events: EventWriter<'w, PickupItemEvent>,
}

pub fn game_server_system(mut events: LootEvents, game_client_query: Query<(Entity, &GameClient)>) {
    for (entity, game_client) in game_client_query.iter() {
        while let Ok(message) = game_client.client_message_rx.try_recv() {
            if let Err(error) = message.validate() {
                warn!("Dropped invalid message from client {:?}: {}", entity, error);
                continue;
            }

            match message {
                ClientMessage::CreatureDeath(message) => {
                    events.creature_death_events.send(CreatureDeathEvent {
                        creature_type: message.creature_type,
                        position: message.position,
                        killer_id: message.killer_id,
                    });
                }
                ClientMessage::ManualDropRequest(message) => {
                    events.manual_drop_events.send(ManualDropEvent {
                        player_id: message.player_id,
                        item_id: message.item_id,
                        quantity: message.quantity,
                        position: message.position,
                    });
                }
                ClientMessage::PickupRequest(message) => {
                    events.pickup_item_events.send(PickupItemEvent {
                        client: Some(entity),
                        player_id: message.player_id,
                        drop_id: message.drop_id,
                        player_position: message.player_position,
                    });
                }
                ClientMessage::NearbyLootQuery(message) => {
                    events.nearby_loot_events.send(NearbyLootEvent {
                        client: entity,
                        player_id: message.player_id,
                        position: message.position,
                        radius: message.radius,
                    });
                }
            }
        }
    }
}
