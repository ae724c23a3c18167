use crate::domain::stamina;
use crate::state::arena::Arena;

pub const ATTACK_FLAG_MS: u64 = 400;
pub const WALK_FLAG_MS: u64 = 250;
pub const DODGE_FLAG_MS: u64 = 300;

/// True once strictly more than `ttl_ms` has elapsed since `set_at`.
/// A flag with no timestamp is treated as already stale.
fn expired(set_at: Option<u64>, now: u64, ttl_ms: u64) -> bool {
    match set_at {
        Some(t) => now.saturating_sub(t) > ttl_ms,
        None => true,
    }
}

/// Clear stale transient flags and regenerate stamina for every player.
/// Only runs when a client sends `refresh`.
pub fn tick(arena: &mut Arena) {
    let now = arena.now_ms();

    for player in arena.players_mut() {
        if player.is_attacking && expired(player.last_attack, now, ATTACK_FLAG_MS) {
            player.is_attacking = false;
        }
        if player.is_walking && expired(player.last_walk, now, WALK_FLAG_MS) {
            player.is_walking = false;
        }
        if player.is_dodging && expired(player.last_dodge, now, DODGE_FLAG_MS) {
            player.is_dodging = false;
        }

        stamina::regenerate(player);
    }
}
