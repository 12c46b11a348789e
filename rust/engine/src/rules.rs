use serde::{Deserialize, Serialize};

use crate::player::{Decision, PlayerAction as A};

/// Why the engine changed or overrode what an agent asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Adjustment {
    /// Empty stack: folded without consulting the agent.
    ForcedFold,
    /// Stack below the minimum bet: all-in without consulting the agent.
    ForcedAllIn,
    /// Amount above the stack was cut down to the stack.
    ClampedToStack { requested: u32 },
    /// Fold or check carried chips; the amount was dropped.
    AmountIgnored { requested: u32 },
    /// All-in for a different amount than the stack.
    AllInCorrected { requested: u32 },
    /// Agent failed every attempt; the player folded.
    AgentUnresponsive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedDecision {
    pub decision: Decision,
    pub adjustment: Option<Adjustment>,
}

impl ValidatedDecision {
    fn unchanged(decision: Decision) -> Self {
        Self {
            decision,
            adjustment: None,
        }
    }

    fn adjusted(decision: Decision, adjustment: Adjustment) -> Self {
        Self {
            decision,
            adjustment: Some(adjustment),
        }
    }
}

/// Decisions the engine makes on the player's behalf.
///
/// # Examples
///
/// ```
/// use pokersim_engine::player::PlayerAction;
/// use pokersim_engine::rules::forced_decision;
///
/// assert_eq!(forced_decision(0, 20).unwrap().decision.action, PlayerAction::Fold);
/// let short = forced_decision(15, 20).unwrap();
/// assert_eq!(short.decision.action, PlayerAction::AllIn);
/// assert_eq!(short.decision.amount, 15);
/// assert!(forced_decision(500, 20).is_none());
/// ```
pub fn forced_decision(stack: u32, min_bet: u32) -> Option<ValidatedDecision> {
    if stack == 0 {
        return Some(ValidatedDecision::adjusted(
            Decision::fold(),
            Adjustment::ForcedFold,
        ));
    }
    if stack < min_bet {
        return Some(ValidatedDecision::adjusted(
            Decision::new(A::AllIn, stack),
            Adjustment::ForcedAllIn,
        ));
    }
    None
}

/// Brings an agent's decision within legal bounds for `stack`.
///
/// Invalid decisions are repaired rather than rejected, since external
/// agents cannot be trusted to respect the constraints.
///
/// # Examples
///
/// ```
/// use pokersim_engine::player::{Decision, PlayerAction};
/// use pokersim_engine::rules::{validate_decision, Adjustment};
///
/// let v = validate_decision(80, Decision::new(PlayerAction::Raise, 200));
/// assert_eq!(v.decision.amount, 80);
/// assert_eq!(v.adjustment, Some(Adjustment::ClampedToStack { requested: 200 }));
/// ```
pub fn validate_decision(stack: u32, proposed: Decision) -> ValidatedDecision {
    let Decision { action, amount } = proposed;
    match action {
        A::Fold | A::Check => {
            if amount == 0 {
                ValidatedDecision::unchanged(proposed)
            } else {
                ValidatedDecision::adjusted(
                    Decision::new(action, 0),
                    Adjustment::AmountIgnored { requested: amount },
                )
            }
        }
        A::AllIn => {
            if amount == stack {
                ValidatedDecision::unchanged(proposed)
            } else {
                ValidatedDecision::adjusted(
                    Decision::new(A::AllIn, stack),
                    Adjustment::AllInCorrected { requested: amount },
                )
            }
        }
        A::Call | A::Bet | A::Raise => {
            if amount > stack {
                ValidatedDecision::adjusted(
                    Decision::new(action, stack),
                    Adjustment::ClampedToStack { requested: amount },
                )
            } else {
                ValidatedDecision::unchanged(proposed)
            }
        }
    }
}
