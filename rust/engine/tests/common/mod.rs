//! Deterministic agents shared by the engine integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pokersim_engine::agent::{Agent, AgentError};
use pokersim_engine::cards::{Card, Rank, Suit};
use pokersim_engine::config::GameConfig;
use pokersim_engine::game::GameState;
use pokersim_engine::player::{Decision, PlayerAction, PlayerId};

pub fn c(s: Suit, r: Rank) -> Card {
    Card { suit: s, rank: r }
}

pub fn config(players: usize) -> GameConfig {
    GameConfig {
        num_players: players,
        ..GameConfig::default()
    }
}

/// Returns the same decision every time.
pub struct Fixed(pub Decision);

impl Agent for Fixed {
    fn decide(&mut self, _: PlayerId, _: &GameState, _: u32) -> Result<Decision, AgentError> {
        Ok(self.0)
    }
    fn name(&self) -> &str {
        "Fixed"
    }
}

pub fn check() -> Box<dyn Agent> {
    Box::new(Fixed(Decision::check()))
}

pub fn fold() -> Box<dyn Agent> {
    Box::new(Fixed(Decision::fold()))
}

pub fn all_in() -> Box<dyn Agent> {
    Box::new(Fixed(Decision::new(PlayerAction::AllIn, 0)))
}

/// Calls exactly the minimum bet it is shown.
pub struct Caller;

impl Agent for Caller {
    fn decide(&mut self, _: PlayerId, _: &GameState, min_bet: u32) -> Result<Decision, AgentError> {
        Ok(Decision::new(PlayerAction::Call, min_bet))
    }
    fn name(&self) -> &str {
        "Caller"
    }
}

/// Always errors and counts how often it was asked.
pub struct Failing(pub Arc<AtomicUsize>);

impl Agent for Failing {
    fn decide(&mut self, _: PlayerId, _: &GameState, _: u32) -> Result<Decision, AgentError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Err(AgentError::Unavailable("offline".into()))
    }
    fn name(&self) -> &str {
        "Failing"
    }
}
