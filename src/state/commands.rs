use tokio::sync::oneshot;

use crate::domain::events::GameEvent;

/// Command sent from connection handlers to the arena loop.
/// Every command is answered with the serialized snapshot.
#[derive(Debug)]
pub enum ArenaCommand {
    Apply {
        event: GameEvent,
        reply: oneshot::Sender<String>,
    },
    Snapshot {
        reply: oneshot::Sender<String>,
    },
}

impl ArenaCommand {
    pub fn apply(event: GameEvent) -> (Self, oneshot::Receiver<String>) {
        let (reply, rx) = oneshot::channel();
        (ArenaCommand::Apply { event, reply }, rx)
    }

    pub fn snapshot() -> (Self, oneshot::Receiver<String>) {
        let (reply, rx) = oneshot::channel();
        (ArenaCommand::Snapshot { reply }, rx)
    }
}
