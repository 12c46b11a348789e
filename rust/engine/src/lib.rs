//! # pokersim-engine: Multi-Player Poker Hand Simulator Core
//!
//! Deals a hand to 2-23 seats, runs a fixed number of sequential betting
//! rounds with decisions supplied by external agents, and settles the pot at
//! showdown. Every run is reproducible from a seed, and every round is
//! recorded for downstream reward computation and training.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Seeded 52-card pool with draw-without-replacement
//! - [`hand`] - Category classification and tiebreak ranking
//! - [`player`] - Player state, actions and the forced/clamped decision path
//! - [`agent`] - The decision contract implemented by strategies
//! - [`rules`] - Forced decisions and clamping of agent output
//! - [`pot`] - Pot splitting with an explicit remainder policy
//! - [`engine`] - The round engine from blinds to payout
//! - [`game`] - Immutable table snapshots
//! - [`history`] - Append-only per-round history
//! - [`config`] - Table options and their validation
//! - [`logger`] - HandRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use pokersim_engine::cards::{Card, Rank, Suit};
//! use pokersim_engine::hand::{evaluate_hand, tiebreaker_rank, Category};
//!
//! let hole = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//! ];
//! let board = [
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//! ];
//!
//! assert_eq!(evaluate_hand(&hole, &board).unwrap(), Category::RoyalFlush);
//! let tb = tiebreaker_rank(&hole, &board).unwrap();
//! println!("tiebreaker: {}", tb);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use pokersim_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! deck1.shuffle();
//! deck2.shuffle();
//! assert_eq!(deck1.cards(), deck2.cards());
//! ```

pub mod agent;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod history;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
