use bevy::{math::Vec3, prelude::Resource};
use log::warn;
use rand::Rng;
use std::f32::consts::TAU;

use loot_data::ItemId;
use loot_game_common::data::ResolvedDrop;

use crate::game::services::{EntityFactory, EntityHandle};

#[derive(Clone, Debug, PartialEq)]
pub struct PlacedDrop {
    pub item_id: ItemId,
    pub quantity: u32,
    pub position: Vec3,
    pub entity: Option<EntityHandle>,
}

/// Scatters resolved drops around their origin and creates their pickup entities.
#[derive(Clone, Resource)]
pub struct SpawnPlacer {
    jitter_radius: f32,
    lift: f32,
}

impl SpawnPlacer {
    pub fn new(jitter_radius: f32, lift: f32) -> Self {
        Self {
            jitter_radius,
            lift,
        }
    }

    pub fn place(
        &self,
        factory: &mut dyn EntityFactory,
        drops: Vec<ResolvedDrop>,
        origin: Vec3,
    ) -> Vec<PlacedDrop> {
        self.place_with_rng(factory, drops, origin, &mut rand::thread_rng())
    }

    pub fn place_with_rng<R: Rng>(
        &self,
        factory: &mut dyn EntityFactory,
        drops: Vec<ResolvedDrop>,
        origin: Vec3,
        rng: &mut R,
    ) -> Vec<PlacedDrop> {
        drops
            .into_iter()
            .map(|drop| {
                let position = origin + self.offset(rng);
                let entity = create_entity(factory, position, &drop.item_id);
                PlacedDrop {
                    item_id: drop.item_id,
                    quantity: drop.quantity,
                    position,
                    entity,
                }
            })
            .collect()
    }

    /// Places a drop exactly at `position`, used for items dropped by players.
    pub fn place_at(
        &self,
        factory: &mut dyn EntityFactory,
        item_id: ItemId,
        quantity: u32,
        position: Vec3,
    ) -> PlacedDrop {
        let entity = create_entity(factory, position, &item_id);
        PlacedDrop {
            item_id,
            quantity,
            position,
            entity,
        }
    }

    // Uniform over the disk, so sqrt the radius sample
    fn offset<R: Rng>(&self, rng: &mut R) -> Vec3 {
        let distance = self.jitter_radius * rng.gen::<f32>().sqrt();
        let angle = rng.gen_range(0.0..TAU);
        Vec3::new(distance * angle.cos(), self.lift, distance * angle.sin())
    }
}

fn create_entity(
    factory: &mut dyn EntityFactory,
    position: Vec3,
    item_id: &ItemId,
) -> Option<EntityHandle> {
    match factory.create_pickup_entity(position, item_id) {
        Ok(handle) => Some(handle),
        Err(error) => {
            warn!(
                "EntityCreationFailed: {} at {} will be registered without an entity: {}",
                item_id, position, error
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::game::services::{EntityFactoryError, HeadlessEntityFactory};

    use super::*;

    struct FailingEntityFactory;

    impl EntityFactory for FailingEntityFactory {
        fn create_pickup_entity(
            &mut self,
            _position: Vec3,
            _item_id: &ItemId,
        ) -> Result<EntityHandle, EntityFactoryError> {
            Err(EntityFactoryError::Rejected(String::from("scene unavailable")))
        }

        fn destroy_entity(&mut self, _handle: EntityHandle) {}
    }

    fn coins(quantity: u32) -> ResolvedDrop {
        ResolvedDrop {
            item_id: ItemId::from("coins"),
            quantity,
        }
    }

    #[test]
    fn positions_stay_within_jitter_disk() {
        let placer = SpawnPlacer::new(1.0, 0.5);
        let mut factory = HeadlessEntityFactory::new();
        let mut rng = StdRng::seed_from_u64(42);
        let origin = Vec3::new(10.0, 2.0, -4.0);

        for _ in 0..500 {
            let placed =
                placer.place_with_rng(&mut factory, vec![coins(1), coins(2)], origin, &mut rng);
            assert_eq!(placed.len(), 2);

            for drop in placed.iter() {
                let horizontal = Vec3::new(drop.position.x - origin.x, 0.0, drop.position.z - origin.z);
                assert!(horizontal.length() <= 1.0 + 1e-5);
                assert_eq!(drop.position.y, origin.y + 0.5);
                assert!(drop.entity.is_some());
            }
        }
    }

    #[test]
    fn drops_are_dispersed() {
        let placer = SpawnPlacer::new(1.0, 0.5);
        let mut factory = HeadlessEntityFactory::new();
        let mut rng = StdRng::seed_from_u64(5);

        let placed = placer.place_with_rng(
            &mut factory,
            vec![coins(1), coins(1), coins(1)],
            Vec3::ZERO,
            &mut rng,
        );
        assert_ne!(placed[0].position, placed[1].position);
        assert_ne!(placed[1].position, placed[2].position);
        assert_eq!(factory.live_entity_count(), 3);
    }

    #[test]
    fn failed_entity_creation_still_places() {
        let placer = SpawnPlacer::new(1.0, 0.5);
        let mut factory = FailingEntityFactory;

        let placed = placer.place(&mut factory, vec![coins(3)], Vec3::ZERO);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].quantity, 3);
        assert!(placed[0].entity.is_none());
    }

    #[test]
    fn place_at_uses_exact_position() {
        let placer = SpawnPlacer::new(1.0, 0.5);
        let mut factory = HeadlessEntityFactory::new();
        let position = Vec3::new(1.0, 2.0, 3.0);

        let placed = placer.place_at(&mut factory, ItemId::from("sword"), 1, position);
        assert_eq!(placed.position, position);
        assert!(placed.entity.is_some());
    }
}
