use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Deck exhausted: too many players or community cards for 52 cards")]
    DeckExhausted,
    #[error("Invalid hand: expected 2 hole cards and at most 5 community cards, got {hole} and {community}")]
    InvalidHand { hole: usize, community: usize },
    #[error("Insufficient chips: requested {requested}, stack {stack}")]
    InsufficientChips { requested: u32, stack: u32 },
    #[error("Hand is not ready for this operation")]
    HandNotReady,
}
