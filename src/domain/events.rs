use crate::domain::{combat, decay, movement};
use crate::error::ArenaError;
use crate::state::arena::Arena;
use crate::state::player::{Facing, Player};

/// Inbound intent, one variant per event kind
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Refresh,
    Attack { name: String },
    Walk { name: String, facing: Facing },
    Dodge { name: String },
    Join(Player),
    Leave { name: String },
}

impl GameEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::Refresh => "refresh",
            GameEvent::Attack { .. } => "attack",
            GameEvent::Walk { .. } => "walk",
            GameEvent::Dodge { .. } => "dodge",
            GameEvent::Join(_) => "join",
            GameEvent::Leave { .. } => "leave",
        }
    }
}

/// Route one event to the system that owns it.
/// Failures are logged here and never reach the caller.
pub fn handle_event(arena: &mut Arena, event: GameEvent) {
    let kind = event.kind();
    if let Err(e) = dispatch(arena, event) {
        log::warn!("{} event dropped: {}", kind, e);
    }
}

fn dispatch(arena: &mut Arena, event: GameEvent) -> Result<(), ArenaError> {
    match event {
        GameEvent::Refresh => decay::tick(arena),
        GameEvent::Attack { name } => match combat::attack(arena, &name)? {
            combat::AttackOutcome::Hit { victim, health } => {
                log::info!("{} hit {} (health {})", name, victim, health);
            }
            outcome => log::debug!("{} attack: {:?}", name, outcome),
        },
        GameEvent::Walk { name, facing } => {
            if let movement::MoveOutcome::Blocked { by } = movement::walk(arena, &name, facing)? {
                log::debug!("{} walk {:?} blocked by {}", name, facing, by);
            }
        }
        GameEvent::Dodge { name } => {
            let outcome = movement::dodge(arena, &name)?;
            log::debug!("{} dodge: {:?}", name, outcome);
        }
        GameEvent::Join(player) => {
            log::info!("Player {} joined at ({}, {})", player.name, player.x, player.y);
            arena.add(player);
        }
        GameEvent::Leave { name } => {
            if arena.remove(&name).is_some() {
                log::info!("Player {} left", name);
            }
        }
    }
    Ok(())
}
