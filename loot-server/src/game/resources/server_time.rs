use bevy::prelude::Resource;
use std::time::Duration;

/// World time, the duration elapsed since the game world started.
#[derive(Default, Resource)]
pub struct ServerTime {
    pub now: Duration,
}
