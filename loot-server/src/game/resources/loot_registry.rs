use bevy::{math::Vec3, prelude::Resource};
use std::{
    collections::{BTreeSet, HashMap},
    fmt,
    time::Duration,
};

use loot_data::ItemId;
use loot_game_common::messages::{LootId, PlayerId};

use crate::game::services::EntityHandle;

#[derive(Clone, Debug, PartialEq)]
pub struct LootRecord {
    pub id: LootId,
    pub item_id: ItemId,
    pub quantity: u32,
    pub position: Vec3,
    pub dropper_id: Option<PlayerId>,
    pub created_at: Duration,
    pub expires_at: Duration,
    pub entity: Option<EntityHandle>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LootRemovalReason {
    PickedUp,
    Expired,
    Evicted,
}

impl fmt::Display for LootRemovalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LootRemovalReason::PickedUp => f.write_str("PickedUp"),
            LootRemovalReason::Expired => f.write_str("Expired"),
            LootRemovalReason::Evicted => f.write_str("Evicted"),
        }
    }
}

pub struct InsertedLoot {
    pub record: LootRecord,

    /// Oldest records removed to bring the registry back to capacity.
    pub evicted: Vec<LootRecord>,
}

/// Authoritative store of every loot record currently lying in the world.
///
/// Records are indexed by age for capacity eviction and by expiry time for the
/// periodic sweep. Ties within either index are broken by id, which follows
/// insertion order.
#[derive(Resource)]
pub struct LootRegistry {
    ttl: Duration,
    max_capacity: usize,
    next_id: u64,
    records: HashMap<LootId, LootRecord>,
    by_age: BTreeSet<(Duration, LootId)>,
    by_expiry: BTreeSet<(Duration, LootId)>,
}

impl LootRegistry {
    pub fn new(ttl: Duration, max_capacity: usize) -> Self {
        Self {
            ttl,
            max_capacity,
            next_id: 1,
            records: HashMap::new(),
            by_age: BTreeSet::new(),
            by_expiry: BTreeSet::new(),
        }
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    pub fn insert(
        &mut self,
        item_id: ItemId,
        quantity: u32,
        position: Vec3,
        dropper_id: Option<PlayerId>,
        entity: Option<EntityHandle>,
        now: Duration,
    ) -> InsertedLoot {
        let id = LootId::new(self.next_id);
        self.next_id += 1;

        let record = LootRecord {
            id,
            item_id,
            quantity,
            position,
            dropper_id,
            created_at: now,
            expires_at: now + self.ttl,
            entity,
        };
        self.by_age.insert((record.created_at, id));
        self.by_expiry.insert((record.expires_at, id));
        self.records.insert(id, record.clone());

        let mut evicted = Vec::new();
        while self.records.len() > self.max_capacity {
            let oldest = match self.by_age.iter().next() {
                Some(&(_, oldest)) => oldest,
                None => break,
            };

            if let Some(record) = self.remove(oldest) {
                evicted.push(record);
            }
        }

        InsertedLoot { record, evicted }
    }

    pub fn remove(&mut self, id: LootId) -> Option<LootRecord> {
        let record = self.records.remove(&id)?;
        self.by_age.remove(&(record.created_at, id));
        self.by_expiry.remove(&(record.expires_at, id));
        Some(record)
    }

    /// Removes every record whose expiry time is at or before `now`, soonest expiring first.
    pub fn sweep_expired(&mut self, now: Duration) -> Vec<LootRecord> {
        let expired: Vec<LootId> = self
            .by_expiry
            .range(..=(now, LootId::new(u64::MAX)))
            .map(|&(_, id)| id)
            .collect();

        expired
            .into_iter()
            .filter_map(|id| self.remove(id))
            .collect()
    }

    pub fn get(&self, id: LootId) -> Option<&LootRecord> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: LootId) -> bool {
        self.records.contains_key(&id)
    }

    /// Iterates records oldest first.
    pub fn all(&self) -> impl Iterator<Item = &LootRecord> + '_ {
        self.by_age
            .iter()
            .filter_map(move |(_, id)| self.records.get(id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_millis(300000);

    fn insert_at(registry: &mut LootRegistry, millis: u64) -> InsertedLoot {
        registry.insert(
            ItemId::from("coins"),
            1,
            Vec3::ZERO,
            None,
            None,
            Duration::from_millis(millis),
        )
    }

    #[test]
    fn size_never_exceeds_capacity() {
        let mut registry = LootRegistry::new(TTL, 50);

        for i in 0..5000 {
            insert_at(&mut registry, i);
            assert!(registry.len() <= 50);
        }
        assert_eq!(registry.len(), 50);
    }

    #[test]
    fn overflow_evicts_only_the_oldest() {
        let mut registry = LootRegistry::new(TTL, 1000);

        let first = insert_at(&mut registry, 0).record;
        for i in 1..1000 {
            assert!(insert_at(&mut registry, i).evicted.is_empty());
        }
        assert_eq!(registry.len(), 1000);

        let inserted = insert_at(&mut registry, 1000);
        assert_eq!(registry.len(), 1000);
        assert_eq!(inserted.evicted, vec![first.clone()]);
        assert!(registry.get(first.id).is_none());
        assert!(registry.get(inserted.record.id).is_some());
    }

    #[test]
    fn eviction_ties_follow_insertion_order() {
        let mut registry = LootRegistry::new(TTL, 2);

        let first = insert_at(&mut registry, 5).record;
        let second = insert_at(&mut registry, 5).record;
        let third = insert_at(&mut registry, 5);

        assert_eq!(third.evicted, vec![first]);
        assert!(registry.contains(second.id));
        assert!(registry.contains(third.record.id));
    }

    #[test]
    fn record_expires_after_ttl() {
        let mut registry = LootRegistry::new(TTL, 1000);
        let record = insert_at(&mut registry, 0).record;
        assert_eq!(record.expires_at, Duration::from_millis(300000));

        assert!(registry.get(record.id).is_some());
        assert!(registry
            .sweep_expired(Duration::from_millis(299999))
            .is_empty());
        assert!(registry.get(record.id).is_some());

        let swept = registry.sweep_expired(Duration::from_millis(300001));
        assert_eq!(swept, vec![record.clone()]);
        assert!(registry.get(record.id).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn sweep_removes_exactly_the_expired_records() {
        let mut registry = LootRegistry::new(Duration::from_millis(100), 1000);
        for i in 0..200 {
            insert_at(&mut registry, i * 10);
        }

        let now = Duration::from_millis(1000);
        let swept = registry.sweep_expired(now);

        assert!(!swept.is_empty());
        assert!(swept.iter().all(|record| record.expires_at <= now));
        assert!(registry.all().all(|record| record.expires_at > now));
        assert_eq!(swept.len() + registry.len(), 200);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut registry = LootRegistry::new(TTL, 10);
        let record = insert_at(&mut registry, 0).record;

        assert_eq!(registry.remove(record.id), Some(record.clone()));
        assert_eq!(registry.remove(record.id), None);
        assert!(registry.is_empty());
        assert!(registry
            .sweep_expired(Duration::from_secs(3600))
            .is_empty());
    }

    #[test]
    fn ids_are_never_reused() {
        let mut registry = LootRegistry::new(TTL, 1);
        let first = insert_at(&mut registry, 0).record;
        registry.remove(first.id);
        let second = insert_at(&mut registry, 0).record;

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn all_iterates_oldest_first() {
        let mut registry = LootRegistry::new(TTL, 10);
        let late = insert_at(&mut registry, 50).record;
        let early = insert_at(&mut registry, 10).record;

        let ids: Vec<LootId> = registry.all().map(|record| record.id).collect();
        assert_eq!(ids, vec![early.id, late.id]);
    }
}
