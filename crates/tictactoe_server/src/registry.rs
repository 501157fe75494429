//! In-memory registry of live games.
//!
//! The registry owns every [`MatchEngine`]. Each game sits behind its own
//! reader/writer lock so moves on one id are serialized while reads share
//! the lock; the map lock is only held to look up, insert or evict an
//! entry. Games live until evicted or until the registry is dropped.
//!
//! Eviction marks an entry closed under its exclusive lock, so a handle
//! looked up before the sweep reports the game as missing instead of
//! mutating a game nobody can read again.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant};
use tictactoe_engine::{GameState, MatchEngine, MoveError};
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// Opaque game identifier.
///
/// Rendered as a UUID string on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// Generates a fresh random id.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Error raised by registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum RegistryError {
    /// No game has this id.
    #[display("Game {_0} not found")]
    NotFound(GameId),

    /// The engine rejected the move.
    #[display("{_0}")]
    #[from]
    Move(MoveError),

    /// A lock was poisoned by a panicking holder.
    #[display("Game storage lock poisoned")]
    Poisoned,
}

impl std::error::Error for RegistryError {}

/// One hosted game.
#[derive(Debug)]
pub struct GameEntry {
    id: GameId,
    engine: RwLock<MatchEngine>,
    last_active: Mutex<Instant>,
    closed: AtomicBool,
}

impl GameEntry {
    fn new(id: GameId) -> Self {
        Self {
            id,
            engine: RwLock::new(MatchEngine::new()),
            last_active: Mutex::new(Instant::now()),
            closed: AtomicBool::new(false),
        }
    }

    /// Reads a snapshot under the shared lock.
    pub fn snapshot(&self) -> Result<GameState, RegistryError> {
        let engine = self.engine.read().map_err(|_| RegistryError::Poisoned)?;
        self.ensure_open()?;
        let state = engine.current_state();
        self.touch();
        Ok(state)
    }

    /// Applies a move under the exclusive lock.
    pub fn apply_move(&self, x: usize, y: usize) -> Result<GameState, RegistryError> {
        let mut engine = self.engine.write().map_err(|_| RegistryError::Poisoned)?;
        self.ensure_open()?;
        let state = engine.apply_move(x, y)?;
        self.touch();
        Ok(state)
    }

    /// Closes the entry if no one holds its lock. Returns whether it closed.
    fn try_close(&self) -> bool {
        match self.engine.try_write() {
            Ok(_guard) => {
                self.closed.store(true, Ordering::Release);
                true
            }
            Err(_) => false,
        }
    }

    // Called with the engine lock held.
    fn ensure_open(&self) -> Result<(), RegistryError> {
        if self.closed.load(Ordering::Acquire) {
            debug!(game_id = %self.id, "Game was evicted");
            return Err(RegistryError::NotFound(self.id));
        }
        Ok(())
    }

    /// Returns how long the game has been idle at `now`.
    pub fn idle_for(&self, now: Instant) -> Duration {
        match self.last_active.lock() {
            Ok(last) => now.saturating_duration_since(*last),
            Err(poisoned) => now.saturating_duration_since(*poisoned.into_inner()),
        }
    }

    fn touch(&self) {
        let mut last = match self.last_active.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *last = Instant::now();
    }
}

/// Owns all hosted games, keyed by id.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: RwLock<HashMap<GameId, Arc<GameEntry>>>,
}

impl GameRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a new game and returns its id.
    #[instrument(skip(self))]
    pub fn create(&self) -> Result<GameId, RegistryError> {
        let mut games = self.games.write().map_err(|_| {
            error!("Registry map lock poisoned");
            RegistryError::Poisoned
        })?;

        let id = loop {
            let id = GameId::random();
            if let Entry::Vacant(slot) = games.entry(id) {
                slot.insert(Arc::new(GameEntry::new(id)));
                break id;
            }
        };

        info!(game_id = %id, games = games.len(), "Created new game");
        Ok(id)
    }

    /// Looks up a game by id.
    #[instrument(skip(self))]
    pub fn get(&self, id: &GameId) -> Result<Arc<GameEntry>, RegistryError> {
        let games = self.games.read().map_err(|_| RegistryError::Poisoned)?;
        games.get(id).cloned().ok_or_else(|| {
            debug!(game_id = %id, "Game not found");
            RegistryError::NotFound(*id)
        })
    }

    /// Returns the current snapshot of a game.
    #[instrument(skip(self))]
    pub fn state(&self, id: &GameId) -> Result<GameState, RegistryError> {
        self.get(id)?.snapshot()
    }

    /// Applies a move to a game.
    #[instrument(skip(self))]
    pub fn apply_move(&self, id: &GameId, x: usize, y: usize) -> Result<GameState, RegistryError> {
        self.get(id)?.apply_move(x, y)
    }

    /// Removes games idle for longer than `ttl`; returns how many went.
    ///
    /// Games whose lock is held by an in-flight request are kept until the
    /// next sweep.
    #[instrument(skip(self))]
    pub fn evict_idle(&self, ttl: Duration) -> usize {
        let mut games = match self.games.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let now = Instant::now();
        let before = games.len();
        games.retain(|_, entry| entry.idle_for(now) <= ttl || !entry.try_close());
        let evicted = before - games.len();
        if evicted > 0 {
            info!(evicted, remaining = games.len(), "Evicted idle games");
        }
        evicted
    }

    /// Returns how many games are hosted.
    pub fn len(&self) -> usize {
        match self.games.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Checks whether no games are hosted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{BoardError, MatchStatus, Player};

    #[test]
    fn test_create_returns_distinct_ids() {
        let registry = GameRegistry::new();
        let a = registry.create().unwrap();
        let b = registry.create().unwrap();
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_unknown_id_not_found() {
        let registry = GameRegistry::new();
        let id = GameId::random();
        assert_eq!(registry.state(&id), Err(RegistryError::NotFound(id)));
        assert_eq!(registry.apply_move(&id, 0, 0), Err(RegistryError::NotFound(id)));
    }

    #[test]
    fn test_moves_are_per_game() {
        let registry = GameRegistry::new();
        let a = registry.create().unwrap();
        let b = registry.create().unwrap();

        registry.apply_move(&a, 1, 1).unwrap();
        assert_eq!(
            registry.state(&a).unwrap().status(),
            MatchStatus::InProgress(Player::O)
        );
        assert_eq!(
            registry.state(&b).unwrap().status(),
            MatchStatus::InProgress(Player::X)
        );
    }

    #[test]
    fn test_invalid_move_wrapped() {
        let registry = GameRegistry::new();
        let id = registry.create().unwrap();
        registry.apply_move(&id, 0, 0).unwrap();
        assert_eq!(
            registry.apply_move(&id, 0, 0),
            Err(RegistryError::Move(MoveError::Board(
                BoardError::CellOccupied { x: 0, y: 0 }
            )))
        );
    }

    #[test]
    fn test_evict_idle_keeps_fresh_games() {
        let registry = GameRegistry::new();
        registry.create().unwrap();
        assert_eq!(registry.evict_idle(Duration::from_secs(3600)), 0);
        assert_eq!(registry.len(), 1);

        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(registry.evict_idle(Duration::from_millis(5)), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_evicted_handle_reports_not_found() {
        let registry = GameRegistry::new();
        let id = registry.create().unwrap();
        let entry = registry.get(&id).unwrap();

        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(registry.evict_idle(Duration::from_millis(5)), 1);

        assert_eq!(entry.apply_move(0, 0), Err(RegistryError::NotFound(id)));
        assert_eq!(entry.snapshot(), Err(RegistryError::NotFound(id)));
    }

    #[test]
    fn test_evict_skips_locked_games() {
        let registry = GameRegistry::new();
        let id = registry.create().unwrap();
        let entry = registry.get(&id).unwrap();
        std::thread::sleep(Duration::from_millis(20));

        {
            let _reader = entry.engine.read().unwrap();
            assert_eq!(registry.evict_idle(Duration::from_millis(5)), 0);
        }
        assert!(entry.snapshot().is_ok());

        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(registry.evict_idle(Duration::from_millis(5)), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_game_id_parses_from_display() {
        let id = GameId::random();
        assert_eq!(id.to_string().parse::<GameId>().unwrap(), id);
        assert!("not-a-uuid".parse::<GameId>().is_err());
    }
}
