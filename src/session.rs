//! Game session state and the in-memory session repository.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::cards::Hand;
use crate::deck_api::DeckId;

/// Player identifier. The Telegram user id is passed down as a plain
/// integer so the game core holds no transport types.
pub type PlayerId = u64;

/// Where a game currently stands. `Finished` is terminal; finished
/// sessions are removed from the store immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PlayerTurn,
    Finished,
}

/// One player's game in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub deck_id: DeckId,
    pub player_hand: Hand,
    pub dealer_hand: Hand,
    pub phase: Phase,
}

/// Returned by [`SessionStore::create`] when the player already has a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionExists;

impl std::fmt::Display for SessionExists {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a session already exists for this player")
    }
}

impl std::error::Error for SessionExists {}

/// Process-wide mapping from player id to session.
///
/// Readers get a clone and write back with [`update`](Self::update), so
/// concurrent actions for the same player follow last-write-wins. Locks
/// are held only for the map operation itself.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: Mutex<HashMap<PlayerId, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a session for a player that has none. Callers that mean to
    /// replace an existing game must remove it explicitly first.
    pub fn create(&self, player: PlayerId, session: Session) -> Result<(), SessionExists> {
        let mut sessions = self.inner.lock().unwrap();
        if sessions.contains_key(&player) {
            return Err(SessionExists);
        }
        sessions.insert(player, session);
        Ok(())
    }

    /// Fetch a copy of the player's session, if any.
    pub fn get(&self, player: PlayerId) -> Option<Session> {
        self.inner.lock().unwrap().get(&player).cloned()
    }

    /// Write a session back unconditionally. Last write wins.
    pub fn update(&self, player: PlayerId, session: Session) {
        self.inner.lock().unwrap().insert(player, session);
    }

    /// Delete the player's session. A no-op when absent.
    pub fn remove(&self, player: PlayerId) {
        self.inner.lock().unwrap().remove(&player);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_session() -> Session {
        Session {
            deck_id: DeckId::new("deck-1"),
            player_hand: Vec::new(),
            dealer_hand: Vec::new(),
            phase: Phase::PlayerTurn,
        }
    }

    #[test]
    fn test_create_then_get_round_trips() {
        let store = SessionStore::new();
        store.create(1, empty_session()).unwrap();

        let session = store.get(1).expect("session should exist");
        assert_eq!(session.phase, Phase::PlayerTurn);
    }

    #[test]
    fn test_create_fails_when_session_exists() {
        let store = SessionStore::new();
        store.create(1, empty_session()).unwrap();

        assert_eq!(store.create(1, empty_session()), Err(SessionExists));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = SessionStore::new();
        store.create(1, empty_session()).unwrap();

        store.remove(1);
        store.remove(1);

        assert!(store.get(1).is_none());
    }

    #[test]
    fn test_update_overwrites() {
        let store = SessionStore::new();
        store.create(1, empty_session()).unwrap();

        let mut session = store.get(1).unwrap();
        session.phase = Phase::Finished;
        store.update(1, session);

        assert_eq!(store.get(1).unwrap().phase, Phase::Finished);
    }

    #[test]
    fn test_players_are_isolated() {
        let store = SessionStore::new();
        store.create(1, empty_session()).unwrap();
        store.create(2, empty_session()).unwrap();

        store.remove(1);

        assert!(store.get(1).is_none());
        assert!(store.get(2).is_some());
    }
}
