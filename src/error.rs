use thiserror::Error;

/// Failures inside the arena core and its loop
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("player not found: {0}")]
    NotFound(String),

    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("arena loop is no longer running")]
    LoopClosed,
}
