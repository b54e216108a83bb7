use bevy::prelude::Resource;
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::game::{
    resources::PendingPickup,
    services::{Inventory, InventoryError},
};

pub struct PickupCompletion {
    pub pending: PendingPickup,
    pub result: Result<(), InventoryError>,
}

/// Runs inventory calls on the async runtime and carries their results back to the game thread.
#[derive(Resource)]
pub struct InventoryChannel {
    inventory: Arc<dyn Inventory>,
    runtime: Handle,
    completion_tx: Sender<PickupCompletion>,
    pub completion_rx: Receiver<PickupCompletion>,
}

impl InventoryChannel {
    pub fn new(inventory: Arc<dyn Inventory>, runtime: Handle) -> Self {
        let (completion_tx, completion_rx) = crossbeam_channel::unbounded();
        Self {
            inventory,
            runtime,
            completion_tx,
            completion_rx,
        }
    }

    pub fn request_add_item(&self, pending: PendingPickup) {
        let inventory = self.inventory.clone();
        let completion_tx = self.completion_tx.clone();

        self.runtime.spawn(async move {
            let result = inventory
                .try_add_item(pending.player_id, &pending.item_id, pending.quantity)
                .await;

            // The game world may already be shutting down
            completion_tx.send(PickupCompletion { pending, result }).ok();
        });
    }
}
