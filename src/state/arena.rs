use std::fmt;
use std::sync::Arc;

use crate::error::ArenaError;
use crate::state::player::{Player, STAMINA_MAX, STAMINA_MIN};
use crate::utils::clock::{Clock, SystemClock};

/// Entity table: every connected participant, keyed by name.
///
/// Records are kept in join order and that order is the snapshot order.
/// Joining with a name that is already present replaces the existing record
/// in place, so names stay unique and keep their original slot.
pub struct Arena {
    players: Vec<Player>,
    clock: Arc<dyn Clock>,
}

impl Arena {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            players: Vec::new(),
            clock,
        }
    }

    pub fn with_system_clock() -> Self {
        Self::new(Arc::new(SystemClock::new()))
    }

    /// Current time from the arena's clock, in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Insert a player, replacing any record with the same name
    pub fn add(&mut self, mut player: Player) {
        player.stamina = player.stamina.clamp(STAMINA_MIN, STAMINA_MAX);

        match self.index_of(&player.name) {
            Some(i) => {
                log::debug!("Player {} rejoined, replacing record", player.name);
                self.players[i] = player;
            }
            None => self.players.push(player),
        }
    }

    /// Remove a player by name; absent names are ignored
    pub fn remove(&mut self, name: &str) -> Option<Player> {
        let i = self.index_of(name)?;
        Some(self.players.remove(i))
    }

    pub fn get(&self, name: &str) -> Result<&Player, ArenaError> {
        self.players
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ArenaError::NotFound(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Player, ArenaError> {
        self.players
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| ArenaError::NotFound(name.to_string()))
    }

    /// Replace the record matching `player.name`; no-op if absent
    pub fn update(&mut self, player: Player) {
        if let Some(i) = self.index_of(&player.name) {
            self.players[i] = player;
        }
    }

    /// All records in join order
    pub fn snapshot(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == name)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::with_system_clock()
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("players", &self.players)
            .finish_non_exhaustive()
    }
}
