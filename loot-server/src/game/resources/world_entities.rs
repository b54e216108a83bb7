use bevy::prelude::Resource;

use crate::game::services::EntityFactory;

#[derive(Resource)]
pub struct WorldEntities {
    pub factory: Box<dyn EntityFactory + Send + Sync>,
}

impl WorldEntities {
    pub fn new(factory: Box<dyn EntityFactory + Send + Sync>) -> Self {
        Self { factory }
    }
}
