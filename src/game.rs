//! Game flow controller: the only stateful logic in the blackjack bot.
//!
//! Owns the session store and orchestrates session creation, hit/stand
//! transitions, dealer auto-play, and outcome determination. Produces
//! [`Render`] instructions; the dispatch layer turns them into chat
//! messages, so the core never touches the transport.

use tracing::{debug, info};

use crate::cards::score_hand;
use crate::deck_api::CardSource;
use crate::error::GameError;
use crate::session::{Phase, PlayerId, Session, SessionStore};
use crate::texts;

/// Instruction for the dispatch front end. The core decides what to say;
/// the front end decides how to deliver it.
#[derive(Debug, Clone, PartialEq)]
pub enum Render {
    /// Plain text message.
    Message(String),
    /// Text message offered with the hit/stand inline choice buttons.
    Prompt(String),
    /// Photo message with a caption.
    Photo { url: String, caption: String },
}

/// Final result of a finished game, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWins,
    DealerWins,
    Push,
}

/// Decide the outcome from the final scores, checked in order: a busted
/// dealer loses outright, then higher score wins, equal scores push.
pub fn decide_outcome(player_score: u32, dealer_score: u32) -> Outcome {
    if dealer_score > 21 || player_score > dealer_score {
        Outcome::PlayerWins
    } else if player_score == dealer_score {
        Outcome::Push
    } else {
        Outcome::DealerWins
    }
}

/// Orchestrates one blackjack game per player against a [`CardSource`].
///
/// All mutation happens on a local copy of the session, written back only
/// on success, so a failing card source never corrupts stored state.
pub struct GameFlow<C> {
    cards: C,
    sessions: SessionStore,
}

impl<C: CardSource> GameFlow<C> {
    pub fn new(cards: C) -> Self {
        Self {
            cards,
            sessions: SessionStore::new(),
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Start a new game: fresh deck, two cards each, player to move.
    /// Replaces any unfinished game the player still has.
    pub async fn start(&self, player: PlayerId) -> Result<Render, GameError> {
        let deck_id = self.cards.new_deck().await?;
        let player_hand = self.cards.draw(&deck_id, 2).await?;
        let dealer_hand = self.cards.draw(&deck_id, 2).await?;

        let session = Session {
            deck_id,
            player_hand,
            dealer_hand,
            phase: Phase::PlayerTurn,
        };
        let prompt = texts::turn_prompt(&session);

        self.sessions.remove(player);
        if self.sessions.create(player, session.clone()).is_err() {
            // Two rapid starts raced between remove and create; the later
            // game wins, matching the store's last-write-wins discipline.
            self.sessions.update(player, session);
        }

        info!(player_id = player, "new blackjack game started");
        Ok(Render::Prompt(prompt))
    }

    /// Draw one more card for the player. Busting ends the game and
    /// removes the session; otherwise the prompt is rendered again.
    pub async fn hit(&self, player: PlayerId) -> Result<Render, GameError> {
        let mut session = self.turn_session(player)?;

        let drawn = self.cards.draw(&session.deck_id, 1).await?;
        session.player_hand.extend(drawn);
        let score = score_hand(&session.player_hand);
        debug!(player_id = player, score, "player drew a card");

        if score > 21 {
            session.phase = Phase::Finished;
            self.sessions.remove(player);
            info!(player_id = player, score, "player bust");
            Ok(Render::Message(texts::bust_summary(&session)))
        } else {
            self.sessions.update(player, session.clone());
            Ok(Render::Prompt(texts::turn_prompt(&session)))
        }
    }

    /// End the player's turn: the dealer draws to 17 or higher, the
    /// outcome is decided, and the session is removed.
    pub async fn stand(&self, player: PlayerId) -> Result<Render, GameError> {
        let mut session = self.turn_session(player)?;
        session.phase = Phase::Finished;

        // Dealer auto-play: stand at 17 or above, no soft-17 distinction.
        while score_hand(&session.dealer_hand) < 17 {
            let drawn = self.cards.draw(&session.deck_id, 1).await?;
            session.dealer_hand.extend(drawn);
        }

        let player_score = score_hand(&session.player_hand);
        let dealer_score = score_hand(&session.dealer_hand);
        let outcome = decide_outcome(player_score, dealer_score);

        self.sessions.remove(player);
        info!(
            player_id = player,
            player_score,
            dealer_score,
            outcome = ?outcome,
            "game finished"
        );
        Ok(Render::Message(texts::stand_summary(&session, outcome)))
    }

    /// Fetch a copy of the player's session, rejecting actions that
    /// arrive outside the player's turn.
    fn turn_session(&self, player: PlayerId) -> Result<Session, GameError> {
        let session = self
            .sessions
            .get(player)
            .ok_or(GameError::SessionNotFound)?;
        if session.phase != Phase::PlayerTurn {
            return Err(GameError::InvalidTransition(session.phase));
        }
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_boundary_pairs() {
        assert_eq!(decide_outcome(20, 20), Outcome::Push);
        assert_eq!(decide_outcome(21, 22), Outcome::PlayerWins);
        assert_eq!(decide_outcome(18, 19), Outcome::DealerWins);
        assert_eq!(decide_outcome(21, 21), Outcome::Push);
        assert_eq!(decide_outcome(17, 16), Outcome::PlayerWins);
        assert_eq!(decide_outcome(2, 17), Outcome::DealerWins);
    }

    #[test]
    fn test_dealer_bust_checked_before_comparison() {
        // The dealer busting loses even against a lower player score.
        assert_eq!(decide_outcome(4, 26), Outcome::PlayerWins);
    }
}
