mod connection;
mod server;

pub use connection::{Connection, ConnectionError, MAX_MESSAGE_LENGTH};
pub use server::{LootServer, ProtocolServerError};
