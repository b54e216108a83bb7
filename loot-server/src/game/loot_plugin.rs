use bevy::prelude::{apply_deferred, App, IntoSystemConfigs, Last, Plugin, PreUpdate, Update};

use crate::game::{
    events::{CreatureDeathEvent, ManualDropEvent, NearbyLootEvent, PickupItemEvent},
    loot::SpawnPlacer,
    resources::{
        ExpireSweepTimer, GameConfig, LootRegistry, PickupCoordinator, ServerMessages, ServerTime,
    },
    systems::{
        control_server_system, creature_death_system, expire_time_system, game_server_system,
        manual_drop_system, nearby_loot_system, pickup_completion_system, pickup_item_system,
        server_messages_system,
    },
};

/// Loot lifecycle: drop resolution, placement, pickup, expiry and eviction.
///
/// Builds its resources from the [`GameConfig`] resource, or the defaults when
/// none has been inserted. Expects `GameData`, `WorldEntities`,
/// `InventoryChannel` and `ControlChannel` to be provided by the app.
pub struct LootPlugin;

impl Plugin for LootPlugin {
    fn build(&self, app: &mut App) {
        let game_config = app
            .world
            .get_resource::<GameConfig>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(LootRegistry::new(
            game_config.ttl(),
            game_config.max_capacity,
        ))
        .insert_resource(PickupCoordinator::new(game_config.pickup_range))
        .insert_resource(SpawnPlacer::new(
            game_config.spawn_jitter_radius,
            game_config.spawn_lift,
        ))
        .insert_resource(ExpireSweepTimer::new(game_config.sweep_interval()))
        .init_resource::<ServerMessages>()
        .init_resource::<ServerTime>()
        .insert_resource(game_config);

        app.add_event::<CreatureDeathEvent>()
            .add_event::<ManualDropEvent>()
            .add_event::<NearbyLootEvent>()
            .add_event::<PickupItemEvent>();

        app.add_systems(
            PreUpdate,
            (control_server_system, apply_deferred, game_server_system).chain(),
        );

        // Every registry mutation happens in this chain, one system at a time
        app.add_systems(
            Update,
            (
                creature_death_system,
                manual_drop_system,
                pickup_item_system,
                pickup_completion_system,
                expire_time_system,
                nearby_loot_system,
            )
                .chain(),
        );

        app.add_systems(Last, server_messages_system);
    }
}
