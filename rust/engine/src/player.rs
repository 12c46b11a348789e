use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::cards::Card;
use crate::errors::GameError;
use crate::game::GameState;
use crate::rules::{forced_decision, validate_decision, Adjustment, ValidatedDecision};

/// Stable player identity, independent of the current seating order.
pub type PlayerId = usize;

/// Represents a player action during a betting round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no chips move)
    Check,
    /// Call the current bet
    Call,
    /// Open the betting
    Bet,
    /// Raise the current bet
    Raise,
    /// Commit the whole stack
    AllIn,
}

impl PlayerAction {
    /// Whether this action moves chips from the stack into the pot.
    pub fn moves_chips(self) -> bool {
        matches!(
            self,
            PlayerAction::Call | PlayerAction::Bet | PlayerAction::Raise | PlayerAction::AllIn
        )
    }
}

/// An action together with the chips it commits.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub action: PlayerAction,
    pub amount: u32,
}

impl Decision {
    pub fn new(action: PlayerAction, amount: u32) -> Self {
        Self { action, amount }
    }

    pub fn fold() -> Self {
        Self::new(PlayerAction::Fold, 0)
    }

    pub fn check() -> Self {
        Self::new(PlayerAction::Check, 0)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerStatus {
    Active,
    Folded,
    AllIn,
}

/// Represents a poker player with their chip stack, status and hole cards.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: String,
    stack: u32,
    hole: Vec<Card>,
    status: PlayerStatus,
}

impl Player {
    pub fn new(id: PlayerId, stack: u32) -> Self {
        Self {
            id,
            name: format!("Player_{}", id),
            stack,
            hole: Vec::with_capacity(2),
            status: PlayerStatus::Active,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }

    /// True while the player still takes decisions.
    pub fn can_act(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    pub fn is_folded(&self) -> bool {
        self.status == PlayerStatus::Folded
    }

    pub fn deal(&mut self, cards: [Card; 2]) {
        self.hole.clear();
        self.hole.extend_from_slice(&cards);
    }

    /// Clears hole cards and reactivates the player for a new hand.
    pub fn reset_for_hand(&mut self) {
        self.hole.clear();
        self.status = PlayerStatus::Active;
    }

    pub fn fold(&mut self) {
        self.status = PlayerStatus::Folded;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    pub(crate) fn set_stack(&mut self, stack: u32) {
        self.stack = stack;
    }

    /// Moves `amount` out of the stack. A bet that empties the stack puts
    /// the player all-in.
    pub fn bet(&mut self, amount: u32) -> Result<(), GameError> {
        if amount == 0 {
            return Ok(());
        }
        if amount > self.stack {
            return Err(GameError::InsufficientChips {
                requested: amount,
                stack: self.stack,
            });
        }
        self.stack -= amount;
        if self.stack == 0 {
            self.status = PlayerStatus::AllIn;
        }
        Ok(())
    }

    /// Asks `agent` for a decision and returns the legal version of it.
    ///
    /// An empty stack folds and a stack below `min_bet` goes all-in, both
    /// without consulting the agent. Otherwise the agent gets up to
    /// `attempts` tries; if every try fails the player folds.
    pub fn make_decision(
        &self,
        agent: &mut dyn Agent,
        state: &GameState,
        min_bet: u32,
        attempts: u32,
    ) -> ValidatedDecision {
        if let Some(forced) = forced_decision(self.stack, min_bet) {
            return forced;
        }
        for attempt in 1..=attempts.max(1) {
            match agent.decide(self.id, state, min_bet) {
                Ok(proposed) => return validate_decision(self.stack, proposed),
                Err(e) => {
                    tracing::warn!(
                        player = self.id,
                        agent = agent.name(),
                        attempt,
                        error = %e,
                        "agent failed to decide"
                    );
                }
            }
        }
        ValidatedDecision {
            decision: Decision::fold(),
            adjustment: Some(Adjustment::AgentUnresponsive),
        }
    }
}
