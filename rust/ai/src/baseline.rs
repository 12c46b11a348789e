//! Rule-based agent for benchmarking and table filling.
//!
//! Scores its hand on a 0-10 scale (hole cards only before the flop, the
//! evaluated category afterwards) and maps the score, the minimum bet and
//! the pot onto an action.

use pokersim_engine::agent::{Agent, AgentError};
use pokersim_engine::cards::{Card, Rank};
use pokersim_engine::game::GameState;
use pokersim_engine::hand::{Category, evaluate_hand};
use pokersim_engine::player::{Decision, PlayerAction, PlayerId};

/// Deterministic strategy driven by hand strength and pot odds.
///
/// **Before the flop:**
/// - Premium pairs and big suited aces raise or call
/// - Medium hands call when the price is low
/// - Weak hands fold to a bet and check when free
///
/// **After the flop:**
/// - Two pair or better bets or calls
/// - One pair checks or calls small bets
/// - Everything else folds unless the call is cheap
///
/// # Example
///
/// ```rust
/// use pokersim_ai::baseline::BaselineAgent;
/// use pokersim_engine::agent::Agent;
/// use pokersim_engine::config::GameConfig;
/// use pokersim_engine::engine::Engine;
///
/// let agent = BaselineAgent::new();
/// assert_eq!(agent.name(), "BaselineAgent");
///
/// let cfg = GameConfig { num_players: 3, ..GameConfig::default() };
/// let mut engine = Engine::new(cfg, Some(42), Box::new(agent)).unwrap();
/// engine.play().unwrap();
/// assert_eq!(engine.total_chips(), 3_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAgent;

impl BaselineAgent {
    pub fn new() -> Self {
        Self
    }

    /// Hole-card strength from 0 (junk) to 10 (AA, KK, AKs).
    fn preflop_strength(hole: [Card; 2]) -> u8 {
        use Rank::*;

        let (high, low) = if hole[0].rank >= hole[1].rank {
            (hole[0].rank, hole[1].rank)
        } else {
            (hole[1].rank, hole[0].rank)
        };
        let suited = hole[0].suit == hole[1].suit;
        let pick = |s: u8, o: u8| if suited { s } else { o };

        if high == low {
            return match high {
                Ace | King => 10,
                Queen | Jack => 9,
                Ten => 8,
                Nine => 7,
                Eight => 6,
                Seven => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (Ace, King) => pick(10, 8),
            (Ace, Queen) => pick(8, 7),
            (Ace, Jack) => pick(7, 6),
            (Ace, Ten) => pick(6, 5),
            (Ace, _) => pick(5, 4),
            (King, Queen) => pick(7, 6),
            (King, Jack) => pick(6, 5),
            (King, Ten) => pick(5, 4),
            (Queen, Jack) => pick(6, 5),
            (Queen, Ten) => pick(5, 4),
            _ => {
                let gap = high.value() - low.value();
                if suited && gap <= 2 {
                    if high >= Nine { 5 } else { 4 }
                } else if high >= Jack && low >= Nine {
                    4
                } else {
                    2
                }
            }
        }
    }

    /// Board-aware strength from the evaluated category, or `None` before
    /// the flop.
    fn postflop_strength(hole: [Card; 2], board: &[Card]) -> Option<u8> {
        if board.len() < 3 {
            return None;
        }
        let category = evaluate_hand(&hole, board).ok()?;
        let base = match category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush | Category::RoyalFlush => 10,
        };
        let kicker = u8::from(hole.iter().any(|c| c.rank >= Rank::King));
        Some((base + kicker).min(10))
    }

    /// Share of the pot-after-calling that is already in the pot.
    fn pot_odds(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 1.0;
        }
        pot as f32 / (u64::from(pot) + u64::from(to_call)) as f32
    }

    fn choose(strength: u8, to_call: u32, min_raise: u32, stack: u32, pot: u32) -> Decision {
        if to_call == 0 {
            return Self::choose_unopened(strength, min_raise, stack, pot);
        }

        if to_call > stack {
            return if strength >= 7 {
                Decision::new(PlayerAction::AllIn, stack)
            } else {
                Decision::fold()
            };
        }

        let odds = Self::pot_odds(pot, to_call);
        let call = Decision::new(PlayerAction::Call, to_call);
        match strength {
            9..=10 => {
                let room = stack - to_call;
                let raise = (pot / 2).max(min_raise).min(room);
                if room >= min_raise && raise >= min_raise {
                    Decision::new(PlayerAction::Raise, to_call + raise)
                } else {
                    call
                }
            }
            7..=8 => call,
            5..=6 if odds >= 0.3 || to_call <= pot / 4 => call,
            3..=4 if odds >= 0.4 || to_call <= pot / 6 => call,
            _ => Decision::fold(),
        }
    }

    fn choose_unopened(strength: u8, min_raise: u32, stack: u32, pot: u32) -> Decision {
        let size = match strength {
            9..=10 => (pot * 2 / 3).max(min_raise),
            7..=8 => (pot / 2).max(min_raise),
            _ => return Decision::check(),
        };
        if stack >= min_raise {
            Decision::new(PlayerAction::Bet, size.min(stack))
        } else {
            Decision::check()
        }
    }
}

impl Agent for BaselineAgent {
    fn decide(&mut self, player: PlayerId, state: &GameState, min_bet: u32) -> Result<Decision, AgentError> {
        let me = state
            .player(player)
            .ok_or_else(|| AgentError::NoDecision(format!("player {} not seated", player)))?;

        let hole = match me.cards.as_slice() {
            &[a, b] => [a, b],
            _ => {
                return Ok(if min_bet == 0 { Decision::check() } else { Decision::fold() });
            }
        };

        let strength = Self::postflop_strength(hole, &state.community_cards)
            .unwrap_or_else(|| Self::preflop_strength(hole));
        let decision = Self::choose(strength, min_bet, state.big_blind, me.stack, state.pot);
        tracing::trace!(player, strength, action = ?decision.action, amount = decision.amount, "baseline decision");
        Ok(decision)
    }

    fn name(&self) -> &str {
        "BaselineAgent"
    }
}
