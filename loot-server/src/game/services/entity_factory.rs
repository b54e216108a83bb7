use bevy::math::Vec3;
use log::trace;
use std::collections::HashSet;
use thiserror::Error;

use loot_data::ItemId;

/// Opaque reference to a pickup entity owned by the world renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityHandle(u64);

loot_data::id_wrapper_impl!(EntityHandle, u64);

#[derive(Debug, Error)]
pub enum EntityFactoryError {
    #[error("entity limit of {0} reached")]
    LimitReached(usize),

    #[error("entity creation rejected: {0}")]
    Rejected(String),
}

pub trait EntityFactory {
    fn create_pickup_entity(
        &mut self,
        position: Vec3,
        item_id: &ItemId,
    ) -> Result<EntityHandle, EntityFactoryError>;

    fn destroy_entity(&mut self, handle: EntityHandle);
}

/// Entity factory for running without a renderer, hands out sequential handles.
#[derive(Default)]
pub struct HeadlessEntityFactory {
    next_handle: u64,
    live_entities: HashSet<EntityHandle>,
    limit: Option<usize>,
}

impl HeadlessEntityFactory {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Default::default()
        }
    }

    pub fn live_entity_count(&self) -> usize {
        self.live_entities.len()
    }

    pub fn is_live(&self, handle: EntityHandle) -> bool {
        self.live_entities.contains(&handle)
    }
}

impl EntityFactory for HeadlessEntityFactory {
    fn create_pickup_entity(
        &mut self,
        position: Vec3,
        item_id: &ItemId,
    ) -> Result<EntityHandle, EntityFactoryError> {
        if let Some(limit) = self.limit {
            if self.live_entities.len() >= limit {
                return Err(EntityFactoryError::LimitReached(limit));
            }
        }

        self.next_handle += 1;
        let handle = EntityHandle::new(self.next_handle);
        self.live_entities.insert(handle);
        trace!("Created pickup entity {} for {} at {}", handle, item_id, position);
        Ok(handle)
    }

    fn destroy_entity(&mut self, handle: EntityHandle) {
        if self.live_entities.remove(&handle) {
            trace!("Destroyed pickup entity {}", handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique_and_released() {
        let mut factory = HeadlessEntityFactory::new();
        let item_id = ItemId::from("coins");

        let first = factory.create_pickup_entity(Vec3::ZERO, &item_id).unwrap();
        let second = factory.create_pickup_entity(Vec3::ONE, &item_id).unwrap();
        assert_ne!(first, second);
        assert_eq!(factory.live_entity_count(), 2);

        factory.destroy_entity(first);
        factory.destroy_entity(first);
        assert!(!factory.is_live(first));
        assert!(factory.is_live(second));
        assert_eq!(factory.live_entity_count(), 1);
    }

    #[test]
    fn limit_rejects_creation() {
        let mut factory = HeadlessEntityFactory::with_limit(1);
        let item_id = ItemId::from("coins");

        let handle = factory.create_pickup_entity(Vec3::ZERO, &item_id).unwrap();
        assert!(matches!(
            factory.create_pickup_entity(Vec3::ZERO, &item_id),
            Err(EntityFactoryError::LimitReached(1))
        ));

        factory.destroy_entity(handle);
        assert!(factory.create_pickup_entity(Vec3::ZERO, &item_id).is_ok());
    }
}
