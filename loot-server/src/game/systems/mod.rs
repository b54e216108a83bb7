mod control_server_system;
mod creature_death_system;
mod expire_time_system;
mod game_server_system;
mod manual_drop_system;
mod nearby_loot_system;
mod pickup_completion_system;
mod pickup_item_system;
mod server_messages_system;
mod server_time_system;

pub use control_server_system::control_server_system;
pub use creature_death_system::creature_death_system;
pub use expire_time_system::expire_time_system;
pub use game_server_system::game_server_system;
pub use manual_drop_system::manual_drop_system;
pub use nearby_loot_system::nearby_loot_system;
pub use pickup_completion_system::pickup_completion_system;
pub use pickup_item_system::pickup_item_system;
pub use server_messages_system::server_messages_system;
pub use server_time_system::server_time_system;
