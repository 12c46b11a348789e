use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::hand::EvaluationMode;

pub const DECK_SIZE: usize = 52;
pub const MAX_COMMUNITY_CARDS: usize = 5;
pub const FLOP_SIZE: usize = 3;

/// Table options supplied once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub num_players: usize,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Number of betting rounds per hand.
    pub max_rounds: usize,
    pub starting_stack: u32,
    pub evaluation: EvaluationMode,
    /// Calls made to a failing agent before its seat folds.
    pub max_decision_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_players: 6,
            small_blind: 10,
            big_blind: 20,
            max_rounds: 4,
            starting_stack: 1_000,
            evaluation: EvaluationMode::WholeSet,
            max_decision_attempts: 3,
        }
    }
}

impl GameConfig {
    /// Community cards revealed over a full hand: the flop after the first
    /// round, one card after each later round, never more than five.
    pub fn community_cards_needed(&self) -> usize {
        match self.max_rounds {
            0 => 0,
            n => (FLOP_SIZE + n - 1).min(MAX_COMMUNITY_CARDS),
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.num_players < 2 {
            return Err(GameError::InvalidConfig(format!(
                "num_players must be >= 2 (got {})",
                self.num_players
            )));
        }
        if self.small_blind == 0 || self.big_blind == 0 {
            return Err(GameError::InvalidConfig(
                "blinds must be > 0".to_string(),
            ));
        }
        if self.max_rounds == 0 {
            return Err(GameError::InvalidConfig(
                "max_rounds must be >= 1".to_string(),
            ));
        }
        if self.starting_stack == 0 {
            return Err(GameError::InvalidConfig(
                "starting_stack must be > 0".to_string(),
            ));
        }
        if self.max_decision_attempts == 0 {
            return Err(GameError::InvalidConfig(
                "max_decision_attempts must be >= 1".to_string(),
            ));
        }
        // Pot and stacks are u32; every chip at the table must fit in one pot.
        let total = (self.num_players as u64).saturating_mul(u64::from(self.starting_stack));
        if total > u64::from(u32::MAX) {
            return Err(GameError::InvalidConfig(format!(
                "{} players x {} chips = {} exceeds the chip limit {}",
                self.num_players,
                self.starting_stack,
                total,
                u32::MAX
            )));
        }
        let needed = self
            .num_players
            .saturating_mul(2)
            .saturating_add(self.community_cards_needed());
        if needed > DECK_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "{} players need {} cards, deck has {}",
                self.num_players, needed, DECK_SIZE
            )));
        }
        Ok(())
    }
}
