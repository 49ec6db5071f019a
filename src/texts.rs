//! User-facing message texts for the blackjack bot.
//!
//! One hardcoded language, assembled here so handlers and the game flow
//! share a single voice.

use crate::cards::{format_hand, score_hand};
use crate::game::Outcome;
use crate::session::Session;

pub const WELCOME: &str = "🃏 Welcome to Blackjack!\n\n\
Rules:\n\
• Reach 21 points, or get closer to it than the dealer\n\
• An ace counts as 1 or 11\n\
• Face cards count as 10\n\n\
Send /play to start a game!";

pub const PLAY_HINT: &str = "Send /play to start a game.";

pub const NO_ACTIVE_GAME: &str = "No active game found. Start a new one with /play";

pub const CARD_TABLE_UNAVAILABLE: &str =
    "❌ The card table is unreachable right now. Please try again later.";

/// Mid-turn prompt: the dealer's hole card stays hidden.
pub fn turn_prompt(session: &Session) -> String {
    let upcard = session
        .dealer_hand
        .first()
        .map(|card| card.rank.label())
        .unwrap_or("?");

    format!(
        "💼 Dealer: {} and ❓\n👤 Your cards: {} (score: {})\n\nYour move:",
        upcard,
        format_hand(&session.player_hand),
        score_hand(&session.player_hand),
    )
}

/// Player went over 21: both hands are revealed and the game is over.
pub fn bust_summary(session: &Session) -> String {
    format!(
        "💥 Bust! {} = {}\n💼 Dealer: {} = {}\n\nYou lose! Send /play to try again",
        format_hand(&session.player_hand),
        score_hand(&session.player_hand),
        format_hand(&session.dealer_hand),
        score_hand(&session.dealer_hand),
    )
}

/// Final summary after the dealer has played out its hand.
pub fn stand_summary(session: &Session, outcome: Outcome) -> String {
    format!(
        "👤 Your cards: {} = {}\n💼 Dealer: {} = {}\n\n{}\n\nSend /play to play again",
        format_hand(&session.player_hand),
        score_hand(&session.player_hand),
        format_hand(&session.dealer_hand),
        score_hand(&session.dealer_hand),
        outcome_line(outcome),
    )
}

pub fn outcome_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWins => "You win! 🎉",
        Outcome::Push => "Push! 🤝",
        Outcome::DealerWins => "You lose! 😢",
    }
}
