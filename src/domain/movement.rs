use crate::domain::stamina::{self, DODGE_COST};
use crate::error::ArenaError;
use crate::state::arena::Arena;
use crate::state::player::{hitbox_at, Facing};

pub const WALK_STEP: i32 = 2;
pub const DODGE_DISTANCE: i32 = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { x: i32, y: i32 },
    Blocked { by: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DodgeOutcome {
    Dodged(MoveOutcome),
    InsufficientStamina,
}

/// Relocate a player unless its hitbox at the target would overlap
/// another player's current hitbox
pub fn move_player(
    arena: &mut Arena,
    name: &str,
    new_x: i32,
    new_y: i32,
) -> Result<MoveOutcome, ArenaError> {
    arena.get(name)?;

    let target = hitbox_at(new_x, new_y);
    let blocker = arena
        .snapshot()
        .iter()
        .filter(|other| other.name != name)
        .find(|other| target.overlaps(&other.hitbox()));

    if let Some(other) = blocker {
        return Ok(MoveOutcome::Blocked {
            by: other.name.clone(),
        });
    }

    let player = arena.get_mut(name)?;
    player.x = new_x;
    player.y = new_y;
    Ok(MoveOutcome::Moved { x: new_x, y: new_y })
}

/// Turn to `direction`, flag walking, then step. A blocked step keeps
/// the new facing and the walking flag.
pub fn walk(arena: &mut Arena, name: &str, direction: Facing) -> Result<MoveOutcome, ArenaError> {
    let now = arena.now_ms();
    let player = arena.get_mut(name)?;
    player.facing = direction;
    player.is_walking = true;
    player.last_walk = Some(now);

    let (x, y) = player.stepped(direction, WALK_STEP);
    move_player(arena, name, x, y)
}

/// Roll in the current facing direction for `DODGE_DISTANCE` units
pub fn dodge(arena: &mut Arena, name: &str) -> Result<DodgeOutcome, ArenaError> {
    let now = arena.now_ms();
    let player = arena.get_mut(name)?;
    if !stamina::has_stamina(player, DODGE_COST) {
        return Ok(DodgeOutcome::InsufficientStamina);
    }

    stamina::consume(player, DODGE_COST);
    player.is_dodging = true;
    player.last_dodge = Some(now);

    let (x, y) = player.stepped(player.facing, DODGE_DISTANCE);
    move_player(arena, name, x, y).map(DodgeOutcome::Dodged)
}
