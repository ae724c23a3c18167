use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::events::GameEvent;
use crate::error::ArenaError;
use crate::state::arena::Arena;
use crate::state::commands::ArenaCommand;
use crate::tick::arena_loop::run_arena_loop;

/// Handle to the arena loop: its command queue and task.
/// Cheap to clone; every connection holds one.
#[derive(Clone)]
pub struct ArenaHandle {
    command_tx: mpsc::Sender<ArenaCommand>,
}

impl ArenaHandle {
    /// Spawn the single-writer loop that owns `arena`
    pub fn spawn(arena: Arena, capacity: usize) -> (Self, JoinHandle<Arena>) {
        let (tx, rx) = mpsc::channel::<ArenaCommand>(capacity);
        let task_handle = tokio::spawn(run_arena_loop(arena, rx));
        (Self { command_tx: tx }, task_handle)
    }

    /// Apply an event and return the snapshot taken right after it
    pub async fn apply(&self, event: GameEvent) -> Result<String, ArenaError> {
        let (cmd, reply) = ArenaCommand::apply(event);
        self.send(cmd, reply).await
    }

    /// Current snapshot without mutating anything
    pub async fn snapshot(&self) -> Result<String, ArenaError> {
        let (cmd, reply) = ArenaCommand::snapshot();
        self.send(cmd, reply).await
    }

    /// True once the loop has stopped receiving commands
    pub fn is_closed(&self) -> bool {
        self.command_tx.is_closed()
    }

    async fn send(
        &self,
        cmd: ArenaCommand,
        reply: tokio::sync::oneshot::Receiver<String>,
    ) -> Result<String, ArenaError> {
        self.command_tx
            .send(cmd)
            .await
            .map_err(|_| ArenaError::LoopClosed)?;
        reply.await.map_err(|_| ArenaError::LoopClosed)
    }
}
