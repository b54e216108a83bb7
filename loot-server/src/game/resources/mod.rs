mod control_channel;
mod expire_sweep_timer;
mod game_config;
mod game_data;
mod inventory_channel;
mod loot_registry;
mod pickup_coordinator;
mod server_messages;
mod server_time;
mod world_entities;

pub use control_channel::ControlChannel;
pub use expire_sweep_timer::ExpireSweepTimer;
pub use game_config::{ConfigError, GameConfig};
pub use game_data::GameData;
pub use inventory_channel::{InventoryChannel, PickupCompletion};
pub use loot_registry::{InsertedLoot, LootRecord, LootRegistry, LootRemovalReason};
pub use pickup_coordinator::{PendingPickup, PickupCoordinator, PickupError};
pub use server_messages::ServerMessages;
pub use server_time::ServerTime;
pub use world_entities::WorldEntities;
