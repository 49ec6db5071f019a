//! Card types, hand scoring, and hand presentation.
//!
//! The types mirror the deck API's wire format so drawn cards deserialize
//! straight into them. Scoring and formatting are pure functions over a
//! hand, kept free of any I/O.

use serde::Deserialize;

/// Card rank as reported by the deck API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Rank {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "JACK")]
    Jack,
    #[serde(rename = "QUEEN")]
    Queen,
    #[serde(rename = "KING")]
    King,
    #[serde(rename = "ACE")]
    Ace,
}

impl Rank {
    /// Base blackjack value of the rank. An ace counts as 11 here; the
    /// scoring loop reclassifies aces down to 1 as needed.
    pub fn base_value(self) -> u32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }

    /// Rank label exactly as the deck API spells it.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
            Rank::Ace => "ACE",
        }
    }
}

/// Card suit as reported by the deck API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Suit {
    #[serde(rename = "HEARTS")]
    Hearts,
    #[serde(rename = "DIAMONDS")]
    Diamonds,
    #[serde(rename = "CLUBS")]
    Clubs,
    #[serde(rename = "SPADES")]
    Spades,
}

impl Suit {
    pub fn glyph(self) -> &'static str {
        match self {
            Suit::Hearts => "♥️",
            Suit::Diamonds => "♦️",
            Suit::Clubs => "♣️",
            Suit::Spades => "♠️",
        }
    }
}

/// A single playing card, immutable once drawn.
///
/// Extra fields in the API payload (card code, image URLs) are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Card {
    #[serde(rename = "value")]
    pub rank: Rank,
    pub suit: Suit,
}

/// An ordered, append-only sequence of drawn cards.
pub type Hand = Vec<Card>;

/// Score a hand under the ace-flexibility rule.
///
/// Every ace starts at 11; while the total exceeds 21 and a high ace
/// remains, one ace is reclassified down to 1. The result is the maximal
/// total not exceeding 21 reachable by ace assignment, or the minimal
/// overflow total when the hand is bust.
pub fn score_hand(hand: &[Card]) -> u32 {
    let mut total: u32 = hand.iter().map(|card| card.rank.base_value()).sum();
    let mut high_aces = hand.iter().filter(|card| card.rank == Rank::Ace).count();

    while total > 21 && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }

    total
}

/// Render a hand as suit glyphs followed by rank labels, space-joined,
/// preserving hand order.
pub fn format_hand(hand: &[Card]) -> String {
    hand.iter()
        .map(|card| format!("{}{}", card.suit.glyph(), card.rank.label()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spades(ranks: &[Rank]) -> Hand {
        ranks
            .iter()
            .map(|&rank| Card {
                rank,
                suit: Suit::Spades,
            })
            .collect()
    }

    #[test]
    fn test_ace_counts_high_when_it_fits() {
        assert_eq!(score_hand(&spades(&[Rank::Ace, Rank::King])), 21);
    }

    #[test]
    fn test_one_ace_drops_low_to_avoid_bust() {
        assert_eq!(score_hand(&spades(&[Rank::Ace, Rank::Ace, Rank::Nine])), 21);
    }

    #[test]
    fn test_all_aces_reclassify_until_safe() {
        assert_eq!(
            score_hand(&spades(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace])),
            14
        );
    }

    #[test]
    fn test_bust_score_is_minimal_overflow() {
        assert_eq!(score_hand(&spades(&[Rank::Ten, Rank::Nine, Rank::Five])), 24);
    }

    #[test]
    fn test_empty_hand_scores_zero() {
        assert_eq!(score_hand(&[]), 0);
    }

    #[test]
    fn test_format_preserves_order() {
        let hand = vec![
            Card {
                rank: Rank::Ten,
                suit: Suit::Hearts,
            },
            Card {
                rank: Rank::Ace,
                suit: Suit::Spades,
            },
        ];
        assert_eq!(format_hand(&hand), "♥️10 ♠️ACE");
    }

    #[test]
    fn test_format_empty_hand() {
        assert_eq!(format_hand(&[]), "");
    }
}
