use serde::{Deserialize, Serialize};

pub mod client;
pub mod server;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u32);

loot_data::id_wrapper_impl!(PlayerId, u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LootId(u64);

loot_data::id_wrapper_impl!(LootId, u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PickupFailureReason {
    NotFound,
    OutOfRange,
    InventoryFull,
}
