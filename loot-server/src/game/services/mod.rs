mod entity_factory;
mod inventory;

pub use entity_factory::{EntityFactory, EntityFactoryError, EntityHandle, HeadlessEntityFactory};
pub use inventory::{Inventory, InventoryError, InventoryPage, ItemStack, MemoryInventory};
