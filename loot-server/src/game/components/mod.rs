mod game_client;

pub use game_client::GameClient;
