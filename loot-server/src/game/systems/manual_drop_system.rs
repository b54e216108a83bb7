use bevy::ecs::prelude::{EventReader, Res, ResMut};
use log::warn;

use crate::game::{
    events::ManualDropEvent,
    loot::{spawn_loot_drop, SpawnPlacer},
    resources::{GameData, LootRegistry, ServerMessages, ServerTime, WorldEntities},
};

pub fn manual_drop_system(
    mut manual_drop_events: EventReader<ManualDropEvent>,
    game_data: Res<GameData>,
    spawn_placer: Res<SpawnPlacer>,
    server_time: Res<ServerTime>,
    mut loot_registry: ResMut<LootRegistry>,
    mut world_entities: ResMut<WorldEntities>,
    mut server_messages: ResMut<ServerMessages>,
) {
    for event in manual_drop_events.read() {
        if !game_data.items.contains(&event.item_id) {
            warn!(
                "UnknownItemId: player {} tried to drop unknown item {}",
                event.player_id, event.item_id
            );
            continue;
        }

        let placed = spawn_placer.place_at(
            world_entities.factory.as_mut(),
            event.item_id.clone(),
            event.quantity,
            event.position,
        );
        spawn_loot_drop(
            &mut loot_registry,
            &mut world_entities,
            &mut server_messages,
            placed,
            Some(event.player_id),
            server_time.now,
        );
    }
}
