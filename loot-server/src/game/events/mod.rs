mod creature_death_event;
mod manual_drop_event;
mod nearby_loot_event;
mod pickup_item_event;

pub use creature_death_event::CreatureDeathEvent;
pub use manual_drop_event::ManualDropEvent;
pub use nearby_loot_event::NearbyLootEvent;
pub use pickup_item_event::PickupItemEvent;
