use tokio::sync::mpsc;

use crate::domain::events::handle_event;
use crate::domain::snapshot;
use crate::state::arena::Arena;
use crate::state::commands::ArenaCommand;

/// Single writer for the arena.
/// Commands are applied strictly one at a time in arrival order; the loop
/// ends when every sender has been dropped.
pub async fn run_arena_loop(mut arena: Arena, mut command_rx: mpsc::Receiver<ArenaCommand>) -> Arena {
    while let Some(cmd) = command_rx.recv().await {
        process_command(&mut arena, cmd);
    }

    log::info!("Arena loop stopped with {} players", arena.len());
    arena
}

/// Apply one command and answer it with a fresh snapshot
fn process_command(arena: &mut Arena, cmd: ArenaCommand) {
    let reply = match cmd {
        ArenaCommand::Apply { event, reply } => {
            handle_event(arena, event);
            reply
        }
        ArenaCommand::Snapshot { reply } => reply,
    };

    // connection already gone
    if reply.send(snapshot::to_json(arena)).is_err() {
        log::debug!("Snapshot reply dropped, receiver closed");
    }
}
