use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use thiserror::Error;
use tokio::sync::Mutex;

use loot_data::{ItemDatabase, ItemId};
use loot_game_common::messages::PlayerId;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("inventory full")]
    InventoryFull,

    #[error("unknown item {0}")]
    UnknownItem(ItemId),
}

#[async_trait]
pub trait Inventory: Send + Sync {
    async fn try_add_item(
        &self,
        player_id: PlayerId,
        item_id: &ItemId,
        quantity: u32,
    ) -> Result<(), InventoryError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemStack {
    pub item_id: ItemId,
    pub quantity: u32,
}

pub struct InventoryPage {
    slots: Vec<Option<ItemStack>>,
}

impl InventoryPage {
    pub fn new(num_slots: usize) -> Self {
        Self {
            slots: vec![None; num_slots],
        }
    }

    fn free_space(&self, item_id: &ItemId, max_stack: u32) -> u64 {
        self.slots
            .iter()
            .map(|slot| match slot {
                Some(stack) if &stack.item_id == item_id => {
                    max_stack.saturating_sub(stack.quantity) as u64
                }
                Some(_) => 0,
                None => max_stack as u64,
            })
            .sum()
    }

    /// Adds the whole quantity or nothing, topping up existing stacks before using empty slots.
    pub fn try_add_stackable_item(
        &mut self,
        item_id: &ItemId,
        quantity: u32,
        max_stack: u32,
    ) -> Result<(), InventoryError> {
        if self.free_space(item_id, max_stack) < quantity as u64 {
            return Err(InventoryError::InventoryFull);
        }

        let mut remaining = quantity;
        for stack in self.slots.iter_mut().flatten() {
            if remaining == 0 {
                break;
            }

            if &stack.item_id == item_id && stack.quantity < max_stack {
                let amount = remaining.min(max_stack - stack.quantity);
                stack.quantity += amount;
                remaining -= amount;
            }
        }

        for slot in self.slots.iter_mut().filter(|slot| slot.is_none()) {
            if remaining == 0 {
                break;
            }

            let amount = remaining.min(max_stack);
            *slot = Some(ItemStack {
                item_id: item_id.clone(),
                quantity: amount,
            });
            remaining -= amount;
        }

        Ok(())
    }

    pub fn item_count(&self, item_id: &ItemId) -> u64 {
        self.slots
            .iter()
            .flatten()
            .filter(|stack| &stack.item_id == item_id)
            .map(|stack| stack.quantity as u64)
            .sum()
    }
}

/// Slot based inventory kept in memory, one page per player.
pub struct MemoryInventory {
    items: Arc<ItemDatabase>,
    num_slots: usize,
    pages: Mutex<HashMap<PlayerId, InventoryPage>>,
}

impl MemoryInventory {
    pub fn new(items: Arc<ItemDatabase>, num_slots: usize) -> Self {
        Self {
            items,
            num_slots,
            pages: Mutex::new(HashMap::new()),
        }
    }

    pub async fn item_count(&self, player_id: PlayerId, item_id: &ItemId) -> u64 {
        self.pages
            .lock()
            .await
            .get(&player_id)
            .map_or(0, |page| page.item_count(item_id))
    }
}

#[async_trait]
impl Inventory for MemoryInventory {
    async fn try_add_item(
        &self,
        player_id: PlayerId,
        item_id: &ItemId,
        quantity: u32,
    ) -> Result<(), InventoryError> {
        let max_stack = self
            .items
            .get_item(item_id)
            .map(|item| item.max_stack)
            .ok_or_else(|| InventoryError::UnknownItem(item_id.clone()))?;

        let mut pages = self.pages.lock().await;
        pages
            .entry(player_id)
            .or_insert_with(|| InventoryPage::new(self.num_slots))
            .try_add_stackable_item(item_id, quantity, max_stack)
    }
}
