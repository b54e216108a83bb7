mod events;
mod game_world;
mod loot_plugin;
mod systems;

pub mod components;
pub mod loot;
pub mod messages;
pub mod resources;
pub mod services;

pub use game_world::GameWorld;
pub use loot_plugin::LootPlugin;
pub use resources::{GameConfig, GameData};
