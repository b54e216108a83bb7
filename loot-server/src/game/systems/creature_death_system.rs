use bevy::ecs::prelude::{EventReader, Res, ResMut};

use crate::game::{
    events::CreatureDeathEvent,
    loot::{spawn_loot_drop, SpawnPlacer},
    resources::{GameData, LootRegistry, ServerMessages, ServerTime, WorldEntities},
};

pub fn creature_death_system(
    mut creature_death_events: EventReader<CreatureDeathEvent>,
    game_data: Res<GameData>,
    spawn_placer: Res<SpawnPlacer>,
    server_time: Res<ServerTime>,
    mut loot_registry: ResMut<LootRegistry>,
    mut world_entities: ResMut<WorldEntities>,
    mut server_messages: ResMut<ServerMessages>,
) {
    for event in creature_death_events.read() {
        let drops = game_data
            .drop_resolver
            .resolve(&event.creature_type, event.position);
        if drops.is_empty() {
            continue;
        }

        let placed = spawn_placer.place(world_entities.factory.as_mut(), drops, event.position);
        for drop in placed {
            spawn_loot_drop(
                &mut loot_registry,
                &mut world_entities,
                &mut server_messages,
                drop,
                event.killer_id,
                server_time.now,
            );
        }
    }
}
