//! Arena Server - authoritative simulation core for a shared real-time arena
//!
//! Holds the canonical position, health, stamina and action state of every
//! connected player, applies their intents (join, walk, attack, dodge, leave,
//! refresh) and hands back a snapshot for broadcast.
//!
//! - `state`: entity table, player geometry, the loop's command queue
//! - `domain`: movement, combat, stamina and decay rules, event dispatch, snapshots
//! - `tick`: the single-writer loop that owns the arena
//! - `handlers` / `server`: websocket transport (axum)

pub mod domain;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod tick;
pub mod utils;

pub use domain::events::{handle_event, GameEvent};
pub use domain::snapshot::{GameSnapshot, PlayerView};
pub use error::ArenaError;
pub use state::arena::Arena;
pub use state::handle::ArenaHandle;
pub use state::player::{Facing, Player};
pub use utils::clock::{Clock, ManualClock, SystemClock};
pub use utils::config::Config;
