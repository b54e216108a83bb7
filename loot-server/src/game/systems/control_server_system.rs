use bevy::ecs::prelude::{Commands, Res};
use log::{debug, warn};

use crate::game::{
    components::GameClient, messages::control::ControlMessage, resources::ControlChannel,
};

pub fn control_server_system(mut commands: Commands, channel: Res<ControlChannel>) {
    while let Ok(message) = channel.control_rx.try_recv() {
        match message {
            ControlMessage::AddClient {
                client_message_rx,
                server_message_tx,
                response_tx,
            } => {
                let entity = commands
                    .spawn(GameClient::new(client_message_rx, server_message_tx))
                    .id();

                if response_tx.send(entity).is_err() {
                    warn!("Client disconnected before it could be registered");
                    commands.entity(entity).despawn();
                } else {
                    debug!("Added client {:?}", entity);
                }
            }
            ControlMessage::RemoveClient { entity } => {
                if let Some(mut entity_commands) = commands.get_entity(entity) {
                    entity_commands.despawn();
                    debug!("Removed client {:?}", entity);
                }
            }
        }
    }
}
