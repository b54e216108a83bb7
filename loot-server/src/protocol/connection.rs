use bytes::{BufMut, Bytes, BytesMut};
use log::trace;
use thiserror::Error;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt, BufWriter},
    net::TcpStream,
};

use loot_game_common::messages::server::ServerMessage;

pub const MAX_MESSAGE_LENGTH: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("connection lost")]
    ConnectionLost,

    #[error("message longer than {0} bytes")]
    MessageTooLong(usize),
}

/// Newline delimited JSON over a TCP stream.
pub struct Connection {
    stream: BufWriter<TcpStream>,
    buffer: BytesMut,
}

impl Connection {
    pub fn new(socket: TcpStream) -> Self {
        Self {
            stream: BufWriter::new(socket),
            buffer: BytesMut::with_capacity(4 * 1024),
        }
    }

    pub async fn shutdown(&mut self) {
        let _ = self.stream.shutdown().await;
    }

    /// Reads the next line without its terminator.
    pub async fn read_line(&mut self) -> Result<Bytes, anyhow::Error> {
        let mut searched = 0;

        loop {
            if let Some(offset) = self.buffer[searched..].iter().position(|&b| b == b'\n') {
                let mut line = self.buffer.split_to(searched + offset + 1);
                line.truncate(line.len() - 1);
                if line.last() == Some(&b'\r') {
                    line.truncate(line.len() - 1);
                }

                trace!(target: "messages", "RECV {}", String::from_utf8_lossy(&line));
                return Ok(line.freeze());
            }
            searched = self.buffer.len();

            if self.buffer.len() > MAX_MESSAGE_LENGTH {
                return Err(ConnectionError::MessageTooLong(MAX_MESSAGE_LENGTH).into());
            }

            match self.stream.read_buf(&mut self.buffer).await {
                Ok(0) | Err(_) => return Err(ConnectionError::ConnectionLost.into()),
                Ok(_) => {}
            }
        }
    }

    pub async fn write_message(&mut self, message: &ServerMessage) -> Result<(), anyhow::Error> {
        let mut buffer = BytesMut::with_capacity(256).writer();
        serde_json::to_writer(&mut buffer, message)?;
        let mut buffer = buffer.into_inner();
        trace!(target: "messages", "SEND {}", String::from_utf8_lossy(&buffer));
        buffer.put_u8(b'\n');

        self.stream
            .write_all(&buffer)
            .await
            .map_err(|_| ConnectionError::ConnectionLost)?;

        self.stream
            .flush()
            .await
            .map_err(|_| ConnectionError::ConnectionLost)?;

        Ok(())
    }
}
