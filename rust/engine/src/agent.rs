//! The decision contract between the round engine and whatever plays the
//! seats: a trained model, a human at a prompt, or a fixed strategy.

use thiserror::Error;

use crate::game::GameState;
use crate::player::{Decision, PlayerId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("agent unavailable: {0}")]
    Unavailable(String),
    #[error("agent returned no decision: {0}")]
    NoDecision(String),
}

/// Supplies decisions for one or more seats.
///
/// The engine treats every returned [`Decision`] as untrusted: amounts are
/// clamped to the acting player's stack before anything moves, and the
/// clamped value is what gets recorded.
///
/// # Example Implementation
///
/// ```rust
/// use pokersim_engine::agent::{Agent, AgentError};
/// use pokersim_engine::game::GameState;
/// use pokersim_engine::player::{Decision, PlayerAction, PlayerId};
///
/// struct AlwaysCall;
///
/// impl Agent for AlwaysCall {
///     fn decide(&mut self, _player: PlayerId, _state: &GameState, min_bet: u32) -> Result<Decision, AgentError> {
///         Ok(Decision::new(PlayerAction::Call, min_bet))
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysCall"
///     }
/// }
/// ```
pub trait Agent: Send {
    /// Choose an action for `player` given the current snapshot and the
    /// minimum bet that player faces.
    fn decide(
        &mut self,
        player: PlayerId,
        state: &GameState,
        min_bet: u32,
    ) -> Result<Decision, AgentError>;

    fn name(&self) -> &str;
}

/// How seats map to agents.
pub enum AgentBinding {
    /// One agent decides for every seat.
    Shared(Box<dyn Agent>),
    /// One agent per player id.
    PerSeat(Vec<Box<dyn Agent>>),
}

impl AgentBinding {
    pub(crate) fn agent_mut(&mut self, player: PlayerId) -> Option<&mut dyn Agent> {
        let agent: &mut dyn Agent = match self {
            AgentBinding::Shared(a) => a.as_mut(),
            AgentBinding::PerSeat(v) => v.get_mut(player)?.as_mut(),
        };
        Some(agent)
    }

    pub(crate) fn seats(&self) -> Option<usize> {
        match self {
            AgentBinding::Shared(_) => None,
            AgentBinding::PerSeat(v) => Some(v.len()),
        }
    }

    pub fn names(&self) -> Vec<String> {
        match self {
            AgentBinding::Shared(a) => vec![a.name().to_string()],
            AgentBinding::PerSeat(v) => v.iter().map(|a| a.name().to_string()).collect(),
        }
    }
}

impl std::fmt::Debug for AgentBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentBinding::Shared(_) => f.debug_tuple("Shared").field(&self.names()).finish(),
            AgentBinding::PerSeat(_) => f.debug_tuple("PerSeat").field(&self.names()).finish(),
        }
    }
}
