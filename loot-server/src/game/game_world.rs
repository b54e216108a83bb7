use std::sync::Arc;

use bevy::{
    app::ScheduleRunnerPlugin,
    prelude::{App, First, IntoSystemConfigs, PluginGroup},
    time::TimeSystem,
    MinimalPlugins,
};
use crossbeam_channel::Receiver;
use log::info;
use tokio::runtime::Handle;

use crate::game::{
    loot_plugin::LootPlugin,
    messages::control::ControlMessage,
    resources::{ControlChannel, GameConfig, GameData, InventoryChannel, WorldEntities},
    services::{EntityFactory, Inventory},
    systems::server_time_system,
};

pub struct GameWorld {
    control_rx: Receiver<ControlMessage>,
}

impl GameWorld {
    pub fn new(control_rx: Receiver<ControlMessage>) -> Self {
        Self { control_rx }
    }

    pub fn run(
        &mut self,
        game_config: GameConfig,
        game_data: GameData,
        inventory: Arc<dyn Inventory>,
        entity_factory: Box<dyn EntityFactory + Send + Sync>,
        runtime: Handle,
    ) {
        info!(
            "Starting game world at {}Hz with {} creature drop tables",
            game_config.tick_rate_hz,
            game_data.drop_tables.len()
        );

        let mut app = App::new();
        app.add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(game_config.tick_duration())),
        );

        app.insert_resource(ControlChannel::new(self.control_rx.clone()));
        app.insert_resource(InventoryChannel::new(inventory, runtime));
        app.insert_resource(WorldEntities::new(entity_factory));
        app.insert_resource(game_config);
        app.insert_resource(game_data);

        app.add_plugins(LootPlugin);
        app.add_systems(First, server_time_system.after(TimeSystem));

        app.run();
    }
}
