use bevy::{
    ecs::prelude::{Res, ResMut},
    time::Time,
};

use crate::game::resources::ServerTime;

pub fn server_time_system(time: Res<Time>, mut server_time: ResMut<ServerTime>) {
    server_time.now = time.elapsed();
}
