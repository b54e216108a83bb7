use bevy::ecs::prelude::{Res, ResMut};
use log::debug;

use loot_game_common::messages::server::{LootExpired, ServerMessage};

use crate::game::{
    loot::release_loot,
    resources::{
        ExpireSweepTimer, LootRegistry, LootRemovalReason, PickupCoordinator, ServerMessages,
        ServerTime, WorldEntities,
    },
};

pub fn expire_time_system(
    server_time: Res<ServerTime>,
    mut expire_sweep_timer: ResMut<ExpireSweepTimer>,
    mut loot_registry: ResMut<LootRegistry>,
    mut pickup_coordinator: ResMut<PickupCoordinator>,
    mut world_entities: ResMut<WorldEntities>,
    mut server_messages: ResMut<ServerMessages>,
) {
    if !expire_sweep_timer.tick(server_time.now) {
        return;
    }

    let expired = loot_registry.sweep_expired(server_time.now);
    for record in expired.iter() {
        release_loot(&mut world_entities, record, LootRemovalReason::Expired);
        server_messages.send_global_message(ServerMessage::LootExpired(LootExpired {
            drop_id: record.id,
        }));
    }
    pickup_coordinator.forget_missing(&loot_registry);

    if !expired.is_empty() {
        debug!(
            "Swept {} expired loot records, {} remain",
            expired.len(),
            loot_registry.len()
        );
    }
}
