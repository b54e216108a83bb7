use bevy::math::Vec3;
use log::{trace, warn};
use rand::Rng;
use std::sync::Arc;

use loot_data::{CreatureType, DropQuantity, DropTableDatabase, DropTier, ItemDatabase, ItemId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedDrop {
    pub item_id: ItemId,
    pub quantity: u32,
}

pub trait DropResolver {
    fn resolve(&self, creature_type: &CreatureType, death_position: Vec3) -> Vec<ResolvedDrop>;
}

/// Resolves guaranteed / uncommon / rare tiered drop tables.
///
/// Every non-guaranteed entry gets its own independent roll, so several can hit at once.
pub struct TieredDropResolver {
    drop_tables: Arc<DropTableDatabase>,
    items: Arc<ItemDatabase>,
}

impl TieredDropResolver {
    pub fn new(drop_tables: Arc<DropTableDatabase>, items: Arc<ItemDatabase>) -> Self {
        Self { drop_tables, items }
    }

    pub fn resolve_with_rng<R: Rng>(
        &self,
        creature_type: &CreatureType,
        death_position: Vec3,
        rng: &mut R,
    ) -> Vec<ResolvedDrop> {
        let table = if let Some(table) = self.drop_tables.lookup(creature_type) {
            table
        } else {
            warn!(
                "UnknownCreatureType: no drop table for creature type {} died at {}",
                creature_type, death_position
            );
            return Vec::new();
        };

        let mut drops = Vec::new();
        for entry in table.entries.iter() {
            if !self.items.contains(&entry.item_id) {
                warn!(
                    "UnknownItemId: drop table for {} references unknown item {}",
                    creature_type, entry.item_id
                );
                continue;
            }

            let hit = match entry.tier {
                DropTier::Guaranteed => true,
                DropTier::Uncommon | DropTier::Rare => {
                    rng.gen::<f64>() < entry.effective_chance()
                }
            };

            if hit {
                drops.push(ResolvedDrop {
                    item_id: entry.item_id.clone(),
                    quantity: resolve_quantity(entry.quantity, rng),
                });
            }
        }

        trace!(
            "Resolved {} drops for {} at {}",
            drops.len(),
            creature_type,
            death_position
        );
        drops
    }
}

fn resolve_quantity<R: Rng>(quantity: DropQuantity, rng: &mut R) -> u32 {
    match quantity {
        DropQuantity::Fixed(quantity) => quantity,
        DropQuantity::Range(min, max) => rng.gen_range(min..=max),
    }
}

impl DropResolver for TieredDropResolver {
    fn resolve(&self, creature_type: &CreatureType, death_position: Vec3) -> Vec<ResolvedDrop> {
        self.resolve_with_rng(creature_type, death_position, &mut rand::thread_rng())
    }
}
