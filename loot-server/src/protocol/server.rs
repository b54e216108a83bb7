use anyhow::Context;
use crossbeam_channel::Sender;
use log::{info, warn};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::{
    net::TcpListener,
    sync::{mpsc::UnboundedReceiver, oneshot},
};

use loot_game_common::messages::{client::ClientMessage, server::ServerMessage};

use crate::{game::messages::control::ControlMessage, protocol::Connection};

#[derive(Debug, Error)]
pub enum ProtocolServerError {
    #[error("server initiated disconnect")]
    ServerInitiatedDisconnect,

    #[error("game world is not running")]
    GameWorldUnavailable,
}

pub struct LootServer {
    local_addr: SocketAddr,
    listener: TcpListener,
    control_message_tx: Sender<ControlMessage>,
}

impl LootServer {
    pub fn new(
        listener: TcpListener,
        control_message_tx: Sender<ControlMessage>,
    ) -> Result<Self, anyhow::Error> {
        let local_addr = listener.local_addr()?;
        info!("Loot server listening on {}", local_addr);

        Ok(Self {
            local_addr,
            listener,
            control_message_tx,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub async fn run(&mut self) {
        loop {
            let (socket, address) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(error) => {
                    warn!("Failed to accept connection: {}", error);
                    continue;
                }
            };

            let control_message_tx = self.control_message_tx.clone();
            tokio::spawn(async move {
                info!("Accepted connection from {}", address);
                let mut connection = Connection::new(socket);

                if let Err(error) = run_client(&mut connection, control_message_tx).await {
                    info!("Connection from {} closed: {}", address, error);
                }

                connection.shutdown().await;
            });
        }
    }
}

async fn run_client(
    connection: &mut Connection,
    control_message_tx: Sender<ControlMessage>,
) -> Result<(), anyhow::Error> {
    let (client_message_tx, client_message_rx) = crossbeam_channel::unbounded();
    let (server_message_tx, mut server_message_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = oneshot::channel();

    control_message_tx
        .send(ControlMessage::AddClient {
            client_message_rx,
            server_message_tx,
            response_tx,
        })
        .map_err(|_| ProtocolServerError::GameWorldUnavailable)?;
    let entity = response_rx
        .await
        .context("game world dropped the client registration")?;

    let result = handle_messages(connection, &client_message_tx, &mut server_message_rx).await;

    control_message_tx
        .send(ControlMessage::RemoveClient { entity })
        .ok();
    result
}

async fn handle_messages(
    connection: &mut Connection,
    client_message_tx: &Sender<ClientMessage>,
    server_message_rx: &mut UnboundedReceiver<ServerMessage>,
) -> Result<(), anyhow::Error> {
    loop {
        tokio::select! {
            line = connection.read_line() => {
                let line = line?;
                if line.is_empty() {
                    continue;
                }

                match serde_json::from_slice::<ClientMessage>(&line) {
                    Ok(message) => {
                        client_message_tx
                            .send(message)
                            .map_err(|_| ProtocolServerError::GameWorldUnavailable)?;
                    }
                    Err(error) => {
                        warn!("Ignoring malformed message: {}", error);
                    }
                }
            },
            server_message = server_message_rx.recv() => {
                if let Some(message) = server_message {
                    connection.write_message(&message).await?;
                } else {
                    return Err(ProtocolServerError::ServerInitiatedDisconnect.into());
                }
            }
        };
    }
}
