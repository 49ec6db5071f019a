use minibots::cards::{score_hand, Card, Rank, Suit};
use rand::prelude::*;

const NON_ACE_RANKS: [Rank; 12] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

fn random_card(rng: &mut StdRng, ranks: &[Rank]) -> Card {
    Card {
        rank: *ranks.choose(rng).unwrap(),
        suit: *SUITS.choose(rng).unwrap(),
    }
}

/// Brute-force reference: try every ace as 1 or 11 and pick the best
/// total not exceeding 21, or the minimal overflow.
fn reference_score(hand: &[Card]) -> u32 {
    let base: u32 = hand
        .iter()
        .filter(|card| card.rank != Rank::Ace)
        .map(|card| card.rank.base_value())
        .sum();
    let aces = hand.iter().filter(|card| card.rank == Rank::Ace).count() as u32;

    let mut best_under: Option<u32> = None;
    let mut best_over: Option<u32> = None;
    for high_aces in 0..=aces {
        let total = base + high_aces * 11 + (aces - high_aces);
        if total <= 21 {
            best_under = Some(best_under.map_or(total, |best| best.max(total)));
        } else {
            best_over = Some(best_over.map_or(total, |best| best.min(total)));
        }
    }

    best_under.or(best_over).unwrap_or(0)
}

#[test]
fn test_aceless_hands_score_base_sum() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let size = rng.gen_range(0..=8);
        let hand: Vec<Card> = (0..size)
            .map(|_| random_card(&mut rng, &NON_ACE_RANKS))
            .collect();

        let expected: u32 = hand.iter().map(|card| card.rank.base_value()).sum();
        assert_eq!(score_hand(&hand), expected, "hand: {hand:?}");
    }
}

#[test]
fn test_ace_hands_match_best_assignment() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..500 {
        let aces = rng.gen_range(1..=4);
        let others = rng.gen_range(0..=6);
        let mut hand: Vec<Card> = (0..aces)
            .map(|_| Card {
                rank: Rank::Ace,
                suit: *SUITS.choose(&mut rng).unwrap(),
            })
            .collect();
        hand.extend((0..others).map(|_| random_card(&mut rng, &NON_ACE_RANKS)));
        hand.shuffle(&mut rng);

        assert_eq!(score_hand(&hand), reference_score(&hand), "hand: {hand:?}");
    }
}

#[test]
fn test_card_parses_from_api_payload() {
    let card: Card = serde_json::from_str(
        r#"{
            "code": "AS",
            "image": "https://deckofcardsapi.com/static/img/AS.png",
            "value": "ACE",
            "suit": "SPADES"
        }"#,
    )
    .unwrap();

    assert_eq!(
        card,
        Card {
            rank: Rank::Ace,
            suit: Suit::Spades,
        }
    );
}

#[test]
fn test_numeral_ranks_parse_from_digits() {
    let card: Card = serde_json::from_str(r#"{"value": "10", "suit": "HEARTS"}"#).unwrap();
    assert_eq!(card.rank, Rank::Ten);
    assert_eq!(card.suit, Suit::Hearts);
}

#[test]
fn test_unknown_rank_is_rejected() {
    let result = serde_json::from_str::<Card>(r#"{"value": "JOKER", "suit": "HEARTS"}"#);
    assert!(result.is_err());
}
