use bevy::ecs::prelude::{Query, ResMut};

use crate::game::{components::GameClient, resources::ServerMessages};

pub fn server_messages_system(
    query: Query<&GameClient>,
    mut server_messages: ResMut<ServerMessages>,
) {
    for game_client in query.iter() {
        for message in server_messages.pending_global_messages.iter() {
            game_client.server_message_tx.send(message.clone()).ok();
        }
    }

    for message in server_messages.pending_client_messages.drain(..) {
        if let Ok(game_client) = query.get(message.client) {
            game_client.server_message_tx.send(message.message).ok();
        }
    }

    server_messages.pending_global_messages.clear();
}
