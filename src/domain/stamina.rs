use crate::state::player::{Player, STAMINA_MAX, STAMINA_MIN};

pub const ATTACK_COST: i32 = 25;
pub const DODGE_COST: i32 = 30;
pub const REGEN_PER_TICK: i32 = 1;

pub fn has_stamina(player: &Player, amount: i32) -> bool {
    player.stamina >= amount
}

/// Spend stamina, never dropping below zero
pub fn consume(player: &mut Player, amount: i32) {
    player.stamina = (player.stamina - amount).max(STAMINA_MIN);
}

/// Regenerate one tick's worth, capped at the maximum
pub fn regenerate(player: &mut Player) {
    if player.stamina < STAMINA_MAX {
        player.stamina = (player.stamina + REGEN_PER_TICK).min(STAMINA_MAX);
    }
}
