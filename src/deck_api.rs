//! Client for the deck-of-cards HTTP API.
//!
//! The API keeps the shuffled deck server-side; we hold only the opaque
//! deck id and draw from it. Failures propagate to the caller, no retries.

use serde::Deserialize;
use tracing::debug;

use crate::cards::Card;
use crate::error::GameError;

/// Opaque handle for one shuffled deck's server-side state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DeckId(String);

impl DeckId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Source of shuffled decks and card draws.
///
/// The game flow is generic over this so tests can script the cards.
/// Never used as a trait object, so auto trait bounds leak through fine.
#[allow(async_fn_in_trait)]
pub trait CardSource {
    async fn new_deck(&self) -> Result<DeckId, GameError>;
    async fn draw(&self, deck: &DeckId, count: u8) -> Result<Vec<Card>, GameError>;
}

#[derive(Debug, Deserialize)]
struct NewDeckResponse {
    success: bool,
    deck_id: DeckId,
}

#[derive(Debug, Deserialize)]
struct DrawResponse {
    success: bool,
    cards: Vec<Card>,
}

/// Production card source backed by deckofcardsapi.com.
#[derive(Debug, Clone)]
pub struct DeckOfCardsClient {
    http: reqwest::Client,
    base_url: String,
}

impl DeckOfCardsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl CardSource for DeckOfCardsClient {
    async fn new_deck(&self) -> Result<DeckId, GameError> {
        let url = format!("{}/new/shuffle/?deck_count=1", self.base_url);
        let response: NewDeckResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !response.success {
            return Err(GameError::CardSource(
                "deck API reported failure creating a deck".to_string(),
            ));
        }

        debug!(deck_id = %response.deck_id.as_str(), "created shuffled deck");
        Ok(response.deck_id)
    }

    async fn draw(&self, deck: &DeckId, count: u8) -> Result<Vec<Card>, GameError> {
        let url = format!("{}/{}/draw/?count={}", self.base_url, deck.as_str(), count);
        let response: DrawResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !response.success {
            return Err(GameError::CardSource(
                "deck API reported failure drawing cards".to_string(),
            ));
        }
        if response.cards.len() != count as usize {
            return Err(GameError::CardSource(format!(
                "asked for {count} cards, got {}",
                response.cards.len()
            )));
        }

        debug!(deck_id = %deck.as_str(), count, "drew cards");
        Ok(response.cards)
    }
}
