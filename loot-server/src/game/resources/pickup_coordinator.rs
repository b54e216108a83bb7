use bevy::{
    math::Vec3,
    prelude::{Entity, Resource},
};
use log::debug;
use std::{collections::HashSet, time::Duration};
use thiserror::Error;

use loot_data::ItemId;
use loot_game_common::messages::{LootId, PickupFailureReason, PlayerId};

use crate::game::{
    loot::within_range,
    resources::{LootRecord, LootRegistry},
    services::InventoryError,
};

/// A validated pickup waiting for the inventory to accept the item.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingPickup {
    pub player_id: PlayerId,
    pub drop_id: LootId,
    pub item_id: ItemId,
    pub quantity: u32,
    pub client: Option<Entity>,
}

#[derive(Debug, Error, PartialEq)]
pub enum PickupError {
    #[error("loot not found")]
    NotFound,

    #[error("loot {} expired before pickup", .0.id)]
    Expired(LootRecord),

    #[error("loot is out of pickup range")]
    OutOfRange,

    #[error("inventory rejected the item")]
    InventoryFull,
}

impl PickupError {
    pub fn reason(&self) -> PickupFailureReason {
        match self {
            PickupError::NotFound | PickupError::Expired(_) => PickupFailureReason::NotFound,
            PickupError::OutOfRange => PickupFailureReason::OutOfRange,
            PickupError::InventoryFull => PickupFailureReason::InventoryFull,
        }
    }
}

#[derive(Resource)]
pub struct PickupCoordinator {
    pickup_range: f32,
    in_flight: HashSet<LootId>,
}

impl PickupCoordinator {
    pub fn new(pickup_range: f32) -> Self {
        Self {
            pickup_range,
            in_flight: HashSet::new(),
        }
    }

    /// Validates a pickup request and reserves the drop until the inventory answers.
    ///
    /// A record found past its expiry time is removed from the registry and
    /// returned inside [`PickupError::Expired`] so its entity can be released.
    pub fn handle_pickup(
        &mut self,
        registry: &mut LootRegistry,
        player_id: PlayerId,
        drop_id: LootId,
        player_position: Vec3,
        client: Option<Entity>,
        now: Duration,
    ) -> Result<PendingPickup, PickupError> {
        let record = registry.get(drop_id).ok_or(PickupError::NotFound)?;

        if now > record.expires_at {
            return Err(registry
                .remove(drop_id)
                .map_or(PickupError::NotFound, PickupError::Expired));
        }

        // Claimed drops read as missing until the claim resolves, a rejected
        // claim frees the drop for a retry.
        if self.in_flight.contains(&drop_id) {
            debug!(
                "Player {} requested drop {} which already has a pickup in flight",
                player_id, drop_id
            );
            return Err(PickupError::NotFound);
        }

        if !within_range(record.position, player_position, self.pickup_range) {
            return Err(PickupError::OutOfRange);
        }

        let pending = PendingPickup {
            player_id,
            drop_id,
            item_id: record.item_id.clone(),
            quantity: record.quantity,
            client,
        };
        self.in_flight.insert(drop_id);
        Ok(pending)
    }

    /// Applies the inventory result of a pending pickup.
    ///
    /// On success returns the removed record, or `None` when the record already
    /// left the registry while the inventory call was outstanding.
    pub fn complete_pickup(
        &mut self,
        registry: &mut LootRegistry,
        pending: &PendingPickup,
        result: Result<(), InventoryError>,
    ) -> Result<Option<LootRecord>, PickupError> {
        self.in_flight.remove(&pending.drop_id);

        match result {
            Ok(()) => Ok(registry.remove(pending.drop_id)),
            Err(error) => {
                debug!(
                    "Inventory of player {} rejected {} x{} from drop {}: {}",
                    pending.player_id, pending.item_id, pending.quantity, pending.drop_id, error
                );
                Err(PickupError::InventoryFull)
            }
        }
    }

    pub fn is_pending(&self, drop_id: LootId) -> bool {
        self.in_flight.contains(&drop_id)
    }

    /// Drops in-flight markers for records no longer in the registry.
    pub fn forget_missing(&mut self, registry: &LootRegistry) {
        self.in_flight.retain(|drop_id| registry.contains(*drop_id));
    }
}
