use serde::{Deserialize, Serialize};

use crate::error::ArenaError;
use crate::state::arena::Arena;
use crate::state::player::{Facing, Player};

const EMPTY_SNAPSHOT: &str = r#"{"players":[]}"#;

/// Externally visible player fields; timestamps stay internal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub x: i32,
    pub y: i32,
    pub name: String,
    pub health: i32,
    pub stamina: i32,
    pub facing: Facing,
    pub is_attacking: bool,
    pub is_walking: bool,
    pub is_dodging: bool,
    pub skin: String,
}

impl From<&Player> for PlayerView {
    fn from(p: &Player) -> Self {
        Self {
            x: p.x,
            y: p.y,
            name: p.name.clone(),
            health: p.health,
            stamina: p.stamina,
            facing: p.facing,
            is_attacking: p.is_attacking,
            is_walking: p.is_walking,
            is_dodging: p.is_dodging,
            skin: p.skin.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: Vec<PlayerView>,
}

/// Snapshot in the table's join order
pub fn capture(arena: &Arena) -> GameSnapshot {
    GameSnapshot {
        players: arena.snapshot().iter().map(PlayerView::from).collect(),
    }
}

pub fn try_to_json(arena: &Arena) -> Result<String, ArenaError> {
    Ok(serde_json::to_string(&capture(arena))?)
}

/// Serialized snapshot; falls back to an empty player list on failure
pub fn to_json(arena: &Arena) -> String {
    try_to_json(arena).unwrap_or_else(|e| {
        log::error!("{}", e);
        EMPTY_SNAPSHOT.to_string()
    })
}
