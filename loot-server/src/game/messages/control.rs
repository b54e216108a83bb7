use bevy::prelude::Entity;
use crossbeam_channel::Receiver;
use tokio::sync::{mpsc::UnboundedSender, oneshot};

use loot_game_common::messages::{client::ClientMessage, server::ServerMessage};

pub enum ControlMessage {
    AddClient {
        client_message_rx: Receiver<ClientMessage>,
        server_message_tx: UnboundedSender<ServerMessage>,
        response_tx: oneshot::Sender<Entity>,
    },
    RemoveClient {
        entity: Entity,
    },
}
