use bevy::prelude::{Entity, Resource};

use loot_game_common::messages::server::ServerMessage;

pub struct PendingClientMessage {
    pub client: Entity,
    pub message: ServerMessage,
}

/// Outgoing messages queued during a tick, flushed by the server messages system.
#[derive(Default, Resource)]
pub struct ServerMessages {
    pub pending_global_messages: Vec<ServerMessage>,
    pub pending_client_messages: Vec<PendingClientMessage>,
}

impl ServerMessages {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn send_global_message(&mut self, message: ServerMessage) {
        self.pending_global_messages.push(message);
    }

    pub fn send_client_message(&mut self, client: Entity, message: ServerMessage) {
        self.pending_client_messages
            .push(PendingClientMessage { client, message });
    }
}
