use crate::domain::stamina::{self, ATTACK_COST};
use crate::error::ArenaError;
use crate::state::arena::Arena;

pub const ATTACK_REACH: i32 = 10;
pub const ATTACK_DAMAGE: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackOutcome {
    Hit { victim: String, health: i32 },
    Miss,
    InsufficientStamina,
}

/// First player (table order) whose sprite overlaps the attacker's reach.
/// Dodging players cannot be hit.
pub fn find_target(arena: &Arena, name: &str) -> Result<Option<String>, ArenaError> {
    let attacker = arena.get(name)?;
    let reach = attacker.attack_box(ATTACK_REACH);

    let victim = arena
        .snapshot()
        .iter()
        .filter(|p| p.name != name && !p.is_dodging)
        .find(|p| reach.overlaps(&p.sprite()))
        .map(|p| p.name.clone());

    Ok(victim)
}

/// Swing at whatever stands in front of the attacker
pub fn attack(arena: &mut Arena, name: &str) -> Result<AttackOutcome, ArenaError> {
    let now = arena.now_ms();
    let attacker = arena.get_mut(name)?;
    if !stamina::has_stamina(attacker, ATTACK_COST) {
        return Ok(AttackOutcome::InsufficientStamina);
    }

    stamina::consume(attacker, ATTACK_COST);
    attacker.is_attacking = true;
    attacker.last_attack = Some(now);

    let Some(victim_name) = find_target(arena, name)? else {
        return Ok(AttackOutcome::Miss);
    };

    // no game clamp: health may go below zero, only pinned at the i32 floor
    let victim = arena.get_mut(&victim_name)?;
    victim.health = victim.health.saturating_sub(ATTACK_DAMAGE);

    Ok(AttackOutcome::Hit {
        health: victim.health,
        victim: victim_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::player::{Facing, Player, SPRITE_HEIGHT, SPRITE_WIDTH};
    use crate::utils::clock::ManualClock;
    use std::sync::Arc;

    fn arena_with(players: Vec<Player>) -> Arena {
        let mut arena = Arena::new(Arc::new(ManualClock::new(0)));
        for p in players {
            arena.add(p);
        }
        arena
    }

    fn attacker(facing: Facing) -> Player {
        Player::new("player1", 0, 0).with_facing(facing)
    }

    #[test]
    fn test_find_target_reach_per_direction() {
        let cases = [
            (Facing::Right, (SPRITE_WIDTH + 10, 0), true),
            (Facing::Right, (SPRITE_WIDTH + 11, 0), false),
            (Facing::Left, (-SPRITE_WIDTH - 10, 0), true),
            (Facing::Left, (-SPRITE_WIDTH - 11, 0), false),
            (Facing::Up, (0, -SPRITE_HEIGHT - 10), true),
            (Facing::Up, (0, -SPRITE_HEIGHT - 11), false),
            (Facing::Down, (0, SPRITE_HEIGHT + 10), true),
            (Facing::Down, (0, SPRITE_HEIGHT + 11), false),
            // behind the attacker
            (Facing::Right, (-SPRITE_WIDTH - 10, 0), false),
        ];

        for (facing, (x, y), expected) in cases {
            let arena = arena_with(vec![attacker(facing), Player::new("player2", x, y)]);
            let hit = find_target(&arena, "player1").unwrap().is_some();
            assert_eq!(hit, expected, "facing {:?} victim at ({}, {})", facing, x, y);
        }
    }

    #[test]
    fn test_attack_hits_and_consumes() {
        let mut arena = arena_with(vec![attacker(Facing::Right), Player::new("player2", 50, 0)]);
        let outcome = attack(&mut arena, "player1").unwrap();
        assert_eq!(
            outcome,
            AttackOutcome::Hit { victim: "player2".to_string(), health: 90 }
        );

        let a = arena.get("player1").unwrap();
        assert!(a.is_attacking);
        assert_eq!(a.stamina, 75);
        assert_eq!(arena.get("player2").unwrap().health, 90);
    }

    #[test]
    fn test_attack_skips_dodging_victim() {
        let mut dodger = Player::new("player2", 50, 0);
        dodger.is_dodging = true;
        let mut arena = arena_with(vec![attacker(Facing::Right), dodger]);

        assert_eq!(attack(&mut arena, "player1").unwrap(), AttackOutcome::Miss);
        assert_eq!(arena.get("player2").unwrap().health, 100);
        assert!(arena.get("player1").unwrap().is_attacking);
    }

    #[test]
    fn test_attack_hits_only_first_in_order() {
        let mut arena = arena_with(vec![
            attacker(Facing::Right),
            Player::new("player2", 50, 0),
            Player::new("player3", 52, 20),
        ]);
        attack(&mut arena, "player1").unwrap();
        assert_eq!(arena.get("player2").unwrap().health, 90);
        assert_eq!(arena.get("player3").unwrap().health, 100);
    }

    #[test]
    fn test_attack_without_stamina() {
        let mut arena = arena_with(vec![
            attacker(Facing::Right).with_stamina(24),
            Player::new("player2", 50, 0),
        ]);
        assert_eq!(attack(&mut arena, "player1").unwrap(), AttackOutcome::InsufficientStamina);

        let a = arena.get("player1").unwrap();
        assert!(!a.is_attacking);
        assert_eq!(a.stamina, 24);
        assert_eq!(arena.get("player2").unwrap().health, 100);
    }

    #[test]
    fn test_health_goes_negative() {
        let mut arena = arena_with(vec![
            attacker(Facing::Right),
            Player::new("player2", 50, 0).with_health(5),
        ]);
        let outcome = attack(&mut arena, "player1").unwrap();
        assert_eq!(
            outcome,
            AttackOutcome::Hit { victim: "player2".to_string(), health: -5 }
        );
    }

    #[test]
    fn test_health_pinned_at_floor() {
        let mut arena = arena_with(vec![
            attacker(Facing::Right),
            Player::new("player2", 50, 0).with_health(i32::MIN + 3),
        ]);
        attack(&mut arena, "player1").unwrap();
        assert_eq!(arena.get("player2").unwrap().health, i32::MIN);
    }

    #[test]
    fn test_attack_at_coordinate_limits() {
        let mut arena = arena_with(vec![
            Player::new("player1", i32::MAX, i32::MAX).with_facing(Facing::Down),
            Player::new("player2", i32::MAX - 20, i32::MAX),
        ]);
        let outcome = attack(&mut arena, "player1").unwrap();
        assert_eq!(
            outcome,
            AttackOutcome::Hit { victim: "player2".to_string(), health: 90 }
        );
    }

    #[test]
    fn test_attack_missing_attacker() {
        let mut arena = arena_with(vec![]);
        assert!(matches!(attack(&mut arena, "nobody"), Err(ArenaError::NotFound(_))));
    }
}
