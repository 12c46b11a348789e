//! Fixed and random strategies used as table fillers and in tests.

use pokersim_engine::agent::{Agent, AgentError};
use pokersim_engine::game::GameState;
use pokersim_engine::player::{Decision, PlayerAction, PlayerId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Always checks for zero chips.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckAgent;

impl Agent for CheckAgent {
    fn decide(&mut self, _: PlayerId, _: &GameState, _: u32) -> Result<Decision, AgentError> {
        Ok(Decision::check())
    }

    fn name(&self) -> &str {
        "CheckAgent"
    }
}

/// Calls exactly the minimum bet it faces.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallAgent;

impl Agent for CallAgent {
    fn decide(&mut self, _: PlayerId, _: &GameState, min_bet: u32) -> Result<Decision, AgentError> {
        Ok(Decision::new(PlayerAction::Call, min_bet))
    }

    fn name(&self) -> &str {
        "CallAgent"
    }
}

// Cumulative weights out of 100.
const FOLD_UNTIL: u32 = 10;
const CHECK_UNTIL: u32 = 40;
const CALL_UNTIL: u32 = 80;
const BET_UNTIL: u32 = 90;
const RAISE_UNTIL: u32 = 97;

/// Picks weighted random actions from a seeded ChaCha stream, so a table of
/// random agents replays identically for the same seed.
///
/// Bets and raises are sized as one to three times the larger of the
/// minimum bet and the big blind; the engine clamps them to the stack.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: ChaCha20Rng,
}

impl RandomAgent {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha20Rng::seed_from_u64(s),
            None => ChaCha20Rng::from_os_rng(),
        };
        Self { rng }
    }
}

impl Agent for RandomAgent {
    fn decide(&mut self, player: PlayerId, state: &GameState, min_bet: u32) -> Result<Decision, AgentError> {
        let stack = state
            .player(player)
            .map(|p| p.stack)
            .ok_or_else(|| AgentError::NoDecision(format!("player {} not seated", player)))?;
        let unit = min_bet.max(state.big_blind);
        let roll = self.rng.random_range(0..100);
        let decision = if roll < FOLD_UNTIL {
            Decision::fold()
        } else if roll < CHECK_UNTIL {
            Decision::check()
        } else if roll < CALL_UNTIL {
            Decision::new(PlayerAction::Call, min_bet)
        } else if roll < BET_UNTIL {
            Decision::new(PlayerAction::Bet, unit * self.rng.random_range(1..=3))
        } else if roll < RAISE_UNTIL {
            Decision::new(PlayerAction::Raise, min_bet + unit * self.rng.random_range(1..=3))
        } else {
            Decision::new(PlayerAction::AllIn, stack)
        };
        Ok(decision)
    }

    fn name(&self) -> &str {
        "RandomAgent"
    }
}
