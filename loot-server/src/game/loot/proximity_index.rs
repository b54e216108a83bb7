use bevy::math::Vec3;

use crate::game::resources::{LootRecord, LootRegistry};

pub fn within_range(position: Vec3, point: Vec3, range: f32) -> bool {
    position.distance(point) <= range
}

#[derive(Clone, Copy, Debug)]
pub struct NearbyRecord<'a> {
    pub record: &'a LootRecord,
    pub distance: f32,
}

/// Radius queries over the loot registry.
///
/// A linear scan is enough for the registry sizes the capacity limit allows.
pub struct ProximityIndex<'a> {
    registry: &'a LootRegistry,
}

impl<'a> ProximityIndex<'a> {
    pub fn new(registry: &'a LootRegistry) -> Self {
        Self { registry }
    }

    /// Every record within `radius` of `point`, nearest first.
    pub fn nearby(&self, point: Vec3, radius: f32) -> Vec<NearbyRecord<'a>> {
        let mut results: Vec<NearbyRecord<'a>> = self
            .registry
            .all()
            .map(|record| NearbyRecord {
                record,
                distance: record.position.distance(point),
            })
            .filter(|nearby| nearby.distance <= radius)
            .collect();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use loot_data::ItemId;
    use loot_game_common::messages::LootId;

    use super::*;

    fn registry_with(positions: &[Vec3]) -> (LootRegistry, Vec<LootId>) {
        let mut registry = LootRegistry::new(Duration::from_secs(300), 100);
        let ids = positions
            .iter()
            .map(|position| {
                registry
                    .insert(
                        ItemId::from("coins"),
                        1,
                        *position,
                        None,
                        None,
                        Duration::ZERO,
                    )
                    .record
                    .id
            })
            .collect();
        (registry, ids)
    }

    #[test]
    fn nearby_filters_and_sorts_by_distance() {
        let (registry, ids) = registry_with(&[
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(50.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 4.0, 0.0),
        ]);
        let index = ProximityIndex::new(&registry);

        let found: Vec<LootId> = index
            .nearby(Vec3::ZERO, 4.0)
            .iter()
            .map(|nearby| nearby.record.id)
            .collect();

        // Radius boundary is inclusive
        assert_eq!(found, vec![ids[2], ids[0], ids[3]]);
    }

    #[test]
    fn nearby_reports_distances() {
        let (registry, _) = registry_with(&[Vec3::new(0.0, 0.0, 2.0)]);
        let found = ProximityIndex::new(&registry).nearby(Vec3::ZERO, 10.0);

        assert_eq!(found.len(), 1);
        assert!((found[0].distance - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_radius_only_matches_exact_position() {
        let (registry, ids) = registry_with(&[Vec3::ONE, Vec3::new(1.0, 1.0, 1.1)]);
        let found = ProximityIndex::new(&registry).nearby(Vec3::ONE, 0.0);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].record.id, ids[0]);
    }

    #[test]
    fn range_check_is_inclusive() {
        assert!(within_range(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), 2.0));
        assert!(!within_range(Vec3::ZERO, Vec3::new(2.01, 0.0, 0.0), 2.0));
    }
}
