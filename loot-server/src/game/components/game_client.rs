use bevy::ecs::prelude::Component;
use crossbeam_channel::Receiver;
use tokio::sync::mpsc::UnboundedSender;

use loot_game_common::messages::{client::ClientMessage, server::ServerMessage};

#[derive(Component)]
pub struct GameClient {
    pub client_message_rx: Receiver<ClientMessage>,
    pub server_message_tx: UnboundedSender<ServerMessage>,
}

impl GameClient {
    pub fn new(
        client_message_rx: Receiver<ClientMessage>,
        server_message_tx: UnboundedSender<ServerMessage>,
    ) -> Self {
        Self {
            client_message_rx,
            server_message_tx,
        }
    }
}
