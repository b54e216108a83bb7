pub mod data;
pub mod messages;
