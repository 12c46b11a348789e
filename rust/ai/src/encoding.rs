//! Integer codes for the value types that end up in training samples.
//!
//! Codes are positions in the fixed tables below, so they stay stable as
//! long as the tables are not reordered.

use pokersim_engine::cards::{Card, Rank, Suit, all_ranks, all_suits};
use pokersim_engine::player::PlayerAction;

pub const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

pub const ACTIONS: [PlayerAction; 6] = [
    PlayerAction::Fold,
    PlayerAction::Check,
    PlayerAction::Call,
    PlayerAction::Bet,
    PlayerAction::Raise,
    PlayerAction::AllIn,
];

pub fn suit_code(suit: Suit) -> u8 {
    match suit {
        Suit::Hearts => 0,
        Suit::Diamonds => 1,
        Suit::Clubs => 2,
        Suit::Spades => 3,
    }
}

/// Two is 0, Ace is 12.
pub fn rank_code(rank: Rank) -> u8 {
    rank.value()
}

pub fn action_code(action: PlayerAction) -> u8 {
    match action {
        PlayerAction::Fold => 0,
        PlayerAction::Check => 1,
        PlayerAction::Call => 2,
        PlayerAction::Bet => 3,
        PlayerAction::Raise => 4,
        PlayerAction::AllIn => 5,
    }
}

/// Suit-major index in `0..52`, matching the order of a fresh deck.
pub fn card_code(card: Card) -> u8 {
    suit_code(card.suit) * 13 + rank_code(card.rank)
}

pub fn card_from_code(code: u8) -> Option<Card> {
    let suit = *all_suits().get(usize::from(code / 13))?;
    let rank = *all_ranks().get(usize::from(code % 13))?;
    Some(Card { suit, rank })
}

pub fn cards_code(cards: &[Card]) -> Vec<u8> {
    cards.iter().copied().map(card_code).collect()
}
