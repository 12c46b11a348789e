//! Turns a played hand into supervised-learning rows.
//!
//! [`annotate_rewards`] attaches a per-event reward to the recorded rounds:
//! chips committed count as a gain for the hand's winners and as a loss for
//! everyone else, and every event also carries the acting player's stack
//! after the payout. [`extract_samples`] then flattens the rounds into one
//! [`Sample`] per event with cards and actions integer-coded.

use pokersim_engine::cards::Card;
use pokersim_engine::game::GameState;
use pokersim_engine::history::{Event, HistoryEntry};
use pokersim_engine::logger::HandRecord;
use pokersim_engine::player::PlayerId;
use serde::{Deserialize, Serialize};

use crate::encoding::{action_code, cards_code};

/// An [`Event`] with its rewards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardedEvent {
    #[serde(flatten)]
    pub event: Event,
    pub round_reward: i64,
    pub game_reward: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedRound {
    #[serde(flatten)]
    pub state: GameState,
    pub events: Vec<RewardedEvent>,
}

/// One training row: the round context seen by the actor, the action it
/// took and the rewards that followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub round: usize,
    pub big_blind: u32,
    pub small_blind: u32,
    pub pot: u32,
    pub community_cards: Vec<u8>,
    pub num_players: usize,
    pub own_stack: u32,
    pub own_cards: Vec<u8>,
    pub action: u8,
    pub amount: u32,
    pub round_reward: i64,
    pub game_reward: u32,
}

/// Attaches `round_reward` and `game_reward` to every event.
///
/// `final_stacks` is indexed by player id; a player missing from it gets a
/// game reward of 0.
///
/// # Example
///
/// ```rust
/// use pokersim_ai::training::annotate_rewards;
/// use pokersim_engine::config::GameConfig;
/// use pokersim_engine::engine::Engine;
/// use pokersim_ai::simple::CallAgent;
///
/// let cfg = GameConfig { num_players: 2, ..GameConfig::default() };
/// let mut engine = Engine::new(cfg, Some(3), Box::new(CallAgent)).unwrap();
/// let showdown = engine.play().unwrap();
/// let rounds = annotate_rewards(engine.history().get(), &showdown.winners, &engine.stacks_by_id());
/// assert_eq!(rounds.len(), 4);
/// ```
pub fn annotate_rewards(
    rounds: &[HistoryEntry],
    winners: &[PlayerId],
    final_stacks: &[u32],
) -> Vec<AnnotatedRound> {
    rounds
        .iter()
        .map(|entry| AnnotatedRound {
            state: entry.state.clone(),
            events: entry
                .events
                .iter()
                .map(|&event| {
                    let amount = i64::from(event.amount);
                    RewardedEvent {
                        event,
                        round_reward: if winners.contains(&event.player) { amount } else { -amount },
                        game_reward: final_stacks.get(event.player).copied().unwrap_or(0),
                    }
                })
                .collect(),
        })
        .collect()
}

/// Flattens annotated rounds into one [`Sample`] per event, in history
/// order.
///
/// The actor's stack and hole cards come from the round-start snapshot. An
/// event whose player is missing from that snapshot is skipped.
pub fn extract_samples(annotated: &[AnnotatedRound]) -> Vec<Sample> {
    let mut samples = Vec::new();
    for round in annotated {
        let state = &round.state;
        let community = cards_code(&state.community_cards);
        for ev in &round.events {
            let Some(me) = state.player(ev.event.player) else {
                tracing::warn!(round = state.round, player = ev.event.player, "event without seat; skipped");
                continue;
            };
            samples.push(Sample {
                round: state.round,
                big_blind: state.big_blind,
                small_blind: state.small_blind,
                pot: state.pot,
                community_cards: community.clone(),
                num_players: state.players_state.len(),
                own_stack: me.stack,
                own_cards: cards_code(&me.cards),
                action: action_code(ev.event.action),
                amount: ev.event.amount,
                round_reward: ev.round_reward,
                game_reward: ev.game_reward,
            });
        }
    }
    samples
}

/// Samples for a recorded hand. A record without a showdown has no
/// winners, so every event is scored as a loss.
pub fn samples_from_record(record: &HandRecord) -> Vec<Sample> {
    let winners: &[PlayerId] = record
        .showdown
        .as_ref()
        .map(|s| s.winners.as_slice())
        .unwrap_or_default();
    extract_samples(&annotate_rewards(&record.rounds, winners, &record.final_stacks))
}

/// Card codes back to cards; unknown codes are dropped.
pub fn decode_cards(codes: &[u8]) -> Vec<Card> {
    codes
        .iter()
        .filter_map(|&c| crate::encoding::card_from_code(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokersim_engine::cards::parse_cards;
    use pokersim_engine::game::PlayerSnapshot;
    use pokersim_engine::player::{PlayerAction, PlayerStatus};

    fn snapshot(id: PlayerId, stack: u32, cards: &str) -> PlayerSnapshot {
        PlayerSnapshot {
            player: id,
            name: format!("Player_{}", id),
            stack,
            cards: parse_cards(cards).unwrap(),
            status: PlayerStatus::Active,
        }
    }

    fn entry() -> HistoryEntry {
        HistoryEntry {
            state: GameState {
                round: 1,
                big_blind: 20,
                small_blind: 10,
                pot: 30,
                community_cards: parse_cards("2h 3h 4h").unwrap(),
                // seating rotated: player 1 acts first
                players_state: vec![snapshot(1, 980, "Kd Kc"), snapshot(0, 990, "As Ad")],
            },
            events: vec![
                Event { player: 1, action: PlayerAction::Bet, amount: 50 },
                Event { player: 0, action: PlayerAction::Call, amount: 50 },
            ],
        }
    }

    #[test]
    fn winners_gain_and_losers_lose_their_commitment() {
        let rounds = annotate_rewards(&[entry()], &[0], &[1_070, 930]);
        let ev = &rounds[0].events;
        assert_eq!(ev[0].round_reward, -50);
        assert_eq!(ev[0].game_reward, 930);
        assert_eq!(ev[1].round_reward, 50);
        assert_eq!(ev[1].game_reward, 1_070);
    }

    #[test]
    fn samples_use_the_actor_seat_not_the_event_position() {
        let samples = extract_samples(&annotate_rewards(&[entry()], &[0], &[1_070, 930]));
        assert_eq!(samples.len(), 2);
        let first = &samples[0];
        assert_eq!(first.own_stack, 980);
        assert_eq!(decode_cards(&first.own_cards), parse_cards("Kd Kc").unwrap());
        assert_eq!(first.action, action_code(PlayerAction::Bet));
        assert_eq!(first.num_players, 2);
        assert_eq!(first.community_cards, vec![0, 1, 2]);
        assert_eq!(samples[1].own_stack, 990);
    }

    #[test]
    fn missing_stack_scores_zero() {
        let rounds = annotate_rewards(&[entry()], &[], &[]);
        assert!(rounds[0].events.iter().all(|e| e.game_reward == 0 && e.round_reward == -50));
    }
}
