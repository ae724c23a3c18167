pub mod models;
pub mod ws;

pub use models::{InboundMessage, PlayerData};
pub use ws::AppState;
